//! Suggestion acceptance.
//!
//! Accepting a suggestion is a pure string transform: splice the insert text
//! plus one trailing space over the suggestion's replace range and put the
//! cursor right after the space. Text before the replace range never moves.

use slashline_types::CompletionSuggestion;

/// New input value and cursor after accepting a suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedSuggestion {
    /// The rewritten input line
    pub value: String,
    /// Char offset just past the inserted text and its trailing space
    pub cursor: usize,
}

/// Replace `[replace_start, replace_end)` with `insert_text + " "`.
///
/// Leading whitespace is trimmed off the remainder so tokens never end up
/// double-spaced, which also makes the operation idempotent: reapplying a
/// suggestion over the token it just produced yields the same line and
/// cursor.
pub fn apply_suggestion(input: &str, suggestion: &CompletionSuggestion) -> AppliedSuggestion {
    let chars: Vec<char> = input.chars().collect();
    let start = suggestion.replace_start.min(chars.len());
    let end = suggestion.replace_end.clamp(start, chars.len());

    let prefix: String = chars[..start].iter().collect();
    let remainder: String = chars[end..].iter().collect();
    let remainder = remainder.trim_start();

    let mut value = String::with_capacity(prefix.len() + suggestion.insert_text.len() + 1 + remainder.len());
    value.push_str(&prefix);
    value.push_str(&suggestion.insert_text);
    value.push(' ');
    value.push_str(remainder);

    AppliedSuggestion {
        value,
        cursor: start + suggestion.insert_text.chars().count() + 1,
    }
}
