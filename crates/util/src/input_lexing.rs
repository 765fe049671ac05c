//! # Input Lexing Utilities
//!
//! This module tokenizes slash-command input, supporting single and double
//! quotes, backslash escapes inside quotes, and cursor classification. All
//! positions are char offsets into the original input, because the caller's
//! cursor contract is a char offset.

/// Token with original char positions.
///
/// `text` holds the unquoted value: quote characters and in-quote escape
/// backslashes are consumed during lexing, so `"foo"bar` yields `foobar`.
/// `start..end` is the half-open char range the token occupies in the raw
/// input, quotes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The unquoted text content of the token
    pub text: String,
    /// The starting char position in the original input
    pub start: usize,
    /// The char position just past the token in the original input
    pub end: usize,
    /// Whether any part of the token was quoted
    pub quoted: bool,
}

/// Where the cursor sits relative to the token stream.
#[derive(Debug, Clone)]
pub struct CursorTokenInfo {
    /// All tokens of the input, in order
    pub tokens: Vec<Token>,
    /// Index of the token the cursor is inside, or `None` for a gap
    pub active_token: Option<usize>,
    /// Raw slice from the active token's start to the cursor, with one
    /// leading quote character stripped
    pub active_prefix: String,
    /// Char offset where acceptance should start replacing
    pub replace_start: usize,
    /// Char offset where acceptance should stop replacing (exclusive)
    pub replace_end: usize,
}

/// Tokenize input using a simple, shell-like lexer.
///
/// Unicode whitespace outside quotes is the only separator. A quote boundary
/// does not terminate a token, and a backslash escapes the next character
/// only while inside a quote. An unterminated trailing quote is tolerated:
/// the token is flushed with the input's char length as its end.
///
/// # Example
/// ```rust
/// use slashline_util::input_lexing::tokenize;
///
/// let tokens = tokenize("/daemon add 'my profile'");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2].text, "my profile");
/// assert!(tokens[2].quoted);
///
/// let tokens = tokenize(r#""foo"bar"#);
/// assert_eq!(tokens[0].text, "foobar");
/// ```
pub fn tokenize(input: &str) -> Vec<Token> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0usize;

    while index < chars.len() {
        while index < chars.len() && chars[index].is_whitespace() {
            index += 1;
        }
        if index >= chars.len() {
            break;
        }

        let start = index;
        let mut text = String::new();
        let mut quoted = false;
        let mut quote: Option<char> = None;

        while index < chars.len() {
            let c = chars[index];
            match quote {
                Some(q) => {
                    if c == '\\' && index + 1 < chars.len() {
                        text.push(chars[index + 1]);
                        index += 2;
                        continue;
                    }
                    if c == q {
                        quote = None;
                        index += 1;
                        continue;
                    }
                    text.push(c);
                    index += 1;
                }
                None => {
                    if c == '\'' || c == '"' {
                        quote = Some(c);
                        quoted = true;
                        index += 1;
                        continue;
                    }
                    if c.is_whitespace() {
                        break;
                    }
                    text.push(c);
                    index += 1;
                }
            }
        }

        tokens.push(Token {
            text,
            start,
            end: index,
            quoted,
        });
    }

    tokens
}

/// Classify the cursor against the token stream.
///
/// A token is "active" under the half-open `(start, end]` convention: a
/// cursor immediately after a token's last character is still inside it, so
/// continued typing extends it, while a cursor at a token's start is a gap.
/// Cursor values past the input's char length are clamped.
pub fn cursor_token_info(input: &str, cursor: usize) -> CursorTokenInfo {
    let char_len = input.chars().count();
    let cursor = cursor.min(char_len);
    let tokens = tokenize(input);

    let active_token = tokens.iter().position(|t| t.start < cursor && cursor <= t.end);
    match active_token {
        Some(index) => {
            let token = &tokens[index];
            let raw: String = input
                .chars()
                .skip(token.start)
                .take(cursor - token.start)
                .collect();
            CursorTokenInfo {
                active_prefix: strip_leading_quote(&raw),
                replace_start: token.start,
                replace_end: token.end,
                active_token: Some(index),
                tokens,
            }
        }
        None => CursorTokenInfo {
            tokens,
            active_token: None,
            active_prefix: String::new(),
            replace_start: cursor,
            replace_end: cursor,
        },
    }
}

fn strip_leading_quote(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some('\'' | '"') => chars.collect(),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn basic_tokenization() {
        assert_eq!(texts("/memory list"), vec!["/memory", "list"]);
    }

    #[test]
    fn quoted_strings_are_unquoted() {
        assert_eq!(texts("cmd 'arg with spaces'"), vec!["cmd", "arg with spaces"]);
        assert_eq!(texts("cmd \"hello world\""), vec!["cmd", "hello world"]);
    }

    #[test]
    fn quote_boundary_does_not_split_token() {
        assert_eq!(texts(r#""foo"bar"#), vec!["foobar"]);
        assert_eq!(texts(r#"a'b c'd"#), vec!["ab cd"]);
    }

    #[test]
    fn escapes_only_recognized_inside_quotes() {
        assert_eq!(texts(r#""a\"b""#), vec![r#"a"b"#]);
        // Outside quotes a backslash is a literal character and whitespace
        // still separates.
        assert_eq!(texts(r"path\ with"), vec![r"path\", "with"]);
    }

    #[test]
    fn unterminated_quote_flushes_to_input_end() {
        let tokens = tokenize("cmd 'unterminated rest");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].text, "unterminated rest");
        assert_eq!(tokens[1].end, "cmd 'unterminated rest".chars().count());
        assert!(tokens[1].quoted);
    }

    #[test]
    fn unicode_whitespace_separates() {
        assert_eq!(texts("a\u{3000}b"), vec!["a", "b"]);
    }

    #[test]
    fn token_ranges_are_monotone_and_disjoint() {
        let tokens = tokenize("  one 'two two'  three ");
        for pair in tokens.windows(2) {
            assert!(pair[0].end <= pair[1].start);
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn rejoining_tokens_reconstructs_the_command_line() {
        let tokens = tokenize("/daemon  add   myprofile 'http://x'");
        let rejoined: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rejoined.join(" "), "/daemon add myprofile http://x");
    }

    #[test]
    fn cursor_after_last_char_is_inside_token() {
        let info = cursor_token_info("/mod", 4);
        assert_eq!(info.active_token, Some(0));
        assert_eq!(info.active_prefix, "/mod");
        assert_eq!(info.replace_start, 0);
        assert_eq!(info.replace_end, 4);
    }

    #[test]
    fn cursor_at_token_start_is_a_gap() {
        let info = cursor_token_info("/model name", 7);
        assert_eq!(info.active_token, None);
        assert_eq!(info.active_prefix, "");
        assert_eq!(info.replace_start, 7);
        assert_eq!(info.replace_end, 7);
    }

    #[test]
    fn cursor_in_trailing_gap() {
        let info = cursor_token_info("/model ", 7);
        assert_eq!(info.active_token, None);
        assert_eq!(info.replace_start, 7);
        assert_eq!(info.replace_end, 7);
    }

    #[test]
    fn cursor_mid_token_takes_partial_prefix() {
        let info = cursor_token_info("/memory list", 10);
        assert_eq!(info.active_token, Some(1));
        assert_eq!(info.active_prefix, "li");
        assert_eq!(info.replace_start, 8);
        assert_eq!(info.replace_end, 12);
    }

    #[test]
    fn active_prefix_strips_one_leading_quote() {
        let info = cursor_token_info("/daemon add 'my", 15);
        assert_eq!(info.active_prefix, "my");
    }

    #[test]
    fn cursor_past_input_is_clamped() {
        let info = cursor_token_info("/mod", 99);
        assert_eq!(info.active_token, Some(0));
        assert_eq!(info.active_prefix, "/mod");
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
        let info = cursor_token_info("", 0);
        assert_eq!(info.active_token, None);
        assert_eq!(info.replace_start, 0);
    }
}
