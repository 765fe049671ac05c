//! Utility functions shared across the slashline workspace.

pub mod input_lexing;
pub mod match_scoring;

pub use input_lexing::{CursorTokenInfo, Token, cursor_token_info, tokenize};
pub use match_scoring::score_candidate;
