//! Ghost-text synthesis.
//!
//! Ghost text is a pure function of the walk state, derived only while the
//! active token is empty. It previews the next expected token: enum values
//! for a pending flag, the reachable subcommand words, or the placeholder of
//! the next positional argument.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::walk::WalkState;

/// Upper bound on literal options previewed before eliding.
const MAX_PREVIEW_OPTIONS: usize = 5;

pub(crate) fn ghost_text(state: &WalkState<'_>, max_width: usize) -> Option<String> {
    if state.free_text_reached {
        return None;
    }

    if let Some(flag) = state.pending_flag_value {
        let ghost = if flag.enum_values.is_empty() {
            "<value>".to_string()
        } else {
            format!("<{}>", flag.enum_values.join("|"))
        };
        return Some(clip_to_width(ghost, max_width));
    }

    if state.current_nodes.is_empty() {
        return None;
    }

    let literals: Vec<&str> = state
        .current_nodes
        .iter()
        .filter_map(|node| node.as_literal())
        .collect();
    if literals.len() == state.current_nodes.len() {
        let preview = if literals.len() <= MAX_PREVIEW_OPTIONS {
            literals.join("|")
        } else {
            format!("{}|…", literals[..MAX_PREVIEW_OPTIONS - 1].join("|"))
        };
        return Some(clip_to_width(format!("<{preview}>"), max_width));
    }

    state
        .current_nodes
        .iter()
        .find_map(|node| node.as_argument())
        .map(|arg| clip_to_width(format!("<{}>", arg.placeholder_text()), max_width))
}

/// Clip to a display-column budget, ending in an ellipsis when cut.
fn clip_to_width(text: String, max_width: usize) -> String {
    if UnicodeWidthStr::width(text.as_str()) <= max_width {
        return text;
    }
    let budget = max_width.saturating_sub(1);
    let mut clipped = String::new();
    let mut width = 0usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        clipped.push(ch);
        width += char_width;
    }
    clipped.push('…');
    clipped
}
