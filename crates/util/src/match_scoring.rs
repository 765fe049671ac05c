//! # Match Scoring
//!
//! Tiered string-similarity scoring used to rank every suggestion kind.
//! Lower scores rank higher. The fixed tier offsets (10/30/50) guarantee
//! that any prefix match beats any substring match, which beats any fuzzy
//! match, regardless of the distance metric inside a tier.

/// Score `candidate` against the user-typed `query`.
///
/// Returns `None` when the candidate does not match at all; such candidates
/// are excluded rather than ranked last.
///
/// Tiers, lower is better:
/// - empty query: `0.0` (matches everything)
/// - case-insensitive exact prefix: `10.0 + (candidate_len - query_len) / 100`
///   so shorter candidates win ties
/// - non-prefix substring: `30.0 + match_index`
/// - ordered subsequence: `50.0 + skipped_chars`
///
/// # Example
/// ```rust
/// use slashline_util::match_scoring::score_candidate;
///
/// assert_eq!(score_candidate("", "anything"), Some(0.0));
/// assert!(score_candidate("mod", "model").unwrap() < 11.0);
/// assert!(score_candidate("ode", "model").unwrap() >= 30.0);
/// assert!(score_candidate("ml", "model").unwrap() >= 50.0);
/// assert!(score_candidate("xyz", "model").is_none());
/// ```
pub fn score_candidate(query: &str, candidate: &str) -> Option<f64> {
    if query.is_empty() {
        return Some(0.0);
    }

    let query_lower = query.to_lowercase();
    let candidate_lower = candidate.to_lowercase();

    if candidate_lower.starts_with(&query_lower) {
        let extra = candidate_lower.chars().count() - query_lower.chars().count();
        return Some(10.0 + extra as f64 / 100.0);
    }

    if let Some(byte_index) = candidate_lower.find(&query_lower) {
        let char_index = candidate_lower[..byte_index].chars().count();
        return Some(30.0 + char_index as f64);
    }

    subsequence_distance(&query_lower, &candidate_lower).map(|skipped| 50.0 + skipped as f64)
}

/// Number of candidate chars skipped while matching `query` as an ordered
/// subsequence, or `None` when the subsequence does not exist.
fn subsequence_distance(query: &str, candidate: &str) -> Option<usize> {
    let mut skipped = 0usize;
    let mut candidate_chars = candidate.chars();

    'query: for query_char in query.chars() {
        for candidate_char in candidate_chars.by_ref() {
            if candidate_char == query_char {
                continue 'query;
            }
            skipped += 1;
        }
        return None;
    }

    Some(skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything_at_zero() {
        assert_eq!(score_candidate("", "model"), Some(0.0));
        assert_eq!(score_candidate("", ""), Some(0.0));
    }

    #[test]
    fn prefix_beats_substring_beats_fuzzy() {
        let prefix = score_candidate("mo", "model").unwrap();
        let substring = score_candidate("ode", "model").unwrap();
        let fuzzy = score_candidate("ml", "model").unwrap();
        assert!(prefix < substring);
        assert!(substring < fuzzy);
        assert!(score_candidate("zz", "model").is_none());
    }

    #[test]
    fn prefix_ties_break_toward_shorter_candidates() {
        let short = score_candidate("the", "theme").unwrap();
        let long = score_candidate("the", "theme-editor").unwrap();
        assert!(short < long);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(score_candidate("MOD", "model"), score_candidate("mod", "MODEL"));
        assert!(score_candidate("Cla", "claude-sonnet-4").unwrap() < 30.0);
    }

    #[test]
    fn substring_score_reflects_match_position() {
        let early = score_candidate("aemon", "daemon").unwrap();
        let late = score_candidate("mon", "daemon").unwrap();
        assert!(early < late);
        assert_eq!(early, 31.0);
        assert_eq!(late, 33.0);
    }

    #[test]
    fn fuzzy_requires_ordered_subsequence() {
        assert!(score_candidate("dmn", "daemon").is_some());
        assert!(score_candidate("nmd", "daemon").is_none());
    }

    #[test]
    fn nonmatching_candidates_are_excluded() {
        assert!(score_candidate("model", "").is_none());
        assert!(score_candidate("qqq", "daemon").is_none());
    }
}
