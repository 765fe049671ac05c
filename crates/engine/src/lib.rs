//! # Slashline Engine
//!
//! The completion engine for a slash-command input surface. Given raw input
//! text and a cursor offset it determines what the user may type next, ranks
//! candidate completions, and produces an inline ghost-text placeholder.
//!
//! ## Usage
//!
//! ```rust
//! use slashline_engine::{StaticProviderContext, resolve_completion};
//!
//! let providers = StaticProviderContext::default()
//!     .with_values("models", &["claude-sonnet-4", "claude-haiku-3.5"]);
//!
//! let result = resolve_completion("/mod", 4, &providers);
//! assert!(result.suggestions.iter().any(|s| s.label == "/model"));
//! ```
//!
//! ## Architecture
//!
//! Resolution is a straight-line composition with no I/O and no shared
//! mutable state, so calling it on every keystroke is safe and cheap:
//!
//! - `slashline_util::input_lexing` splits the input into char-ranged tokens
//!   and classifies the cursor
//! - [`walk`] folds the settled tokens over the command's argument tree
//! - the synthesis layer turns the walk state into scored suggestions and
//!   the ghost placeholder
//! - [`apply`] splices an accepted suggestion back into the input
//!
//! Dynamic values (installed models, known themes) come from a caller-
//! supplied [`ProviderContext`] snapshot; the engine never suspends
//! mid-resolution.

use slashline_registry::CommandRegistry;
use slashline_util::cursor_token_info;
use tracing::debug;

pub mod apply;
pub mod config;
mod ghost;
pub mod provider;
mod suggest;
pub mod walk;

pub use apply::{AppliedSuggestion, apply_suggestion};
pub use config::CompletionConfig;
pub use provider::{NullProviderContext, ProviderContext, StaticProviderContext};
pub use slashline_types::{CompletionResult, CompletionSuggestion, ContextKind, SuggestionKind};
pub use walk::WalkState;

/// Resolve completion against the builtin command catalog with default
/// configuration.
pub fn resolve_completion(
    input: &str,
    cursor: usize,
    providers: &dyn ProviderContext,
) -> CompletionResult {
    resolve_completion_in(
        slashline_registry::builtin(),
        &CompletionConfig::default(),
        input,
        cursor,
        providers,
    )
}

/// Resolve completion against an explicit registry and configuration.
///
/// Never fails: every unresolved situation (input that is not a slash
/// command, an unknown command name, an exhausted grammar, free text)
/// degrades to an empty result rather than an error.
pub fn resolve_completion_in(
    registry: &CommandRegistry,
    config: &CompletionConfig,
    input: &str,
    cursor: usize,
    providers: &dyn ProviderContext,
) -> CompletionResult {
    if !input.trim_start().starts_with('/') {
        return CompletionResult::empty();
    }

    let cursor = cursor.min(input.chars().count());
    let info = cursor_token_info(input, cursor);

    // Inside the command-name token: complete registered command names.
    if info.active_token == Some(0) {
        let items = suggest::command_name_suggestions(
            registry,
            &info.active_prefix,
            info.replace_start,
            info.replace_end,
        );
        let suggestions = suggest::finalize(items, config.max_suggestions);
        debug!(prefix = %info.active_prefix, count = suggestions.len(), "resolved command-name completion");
        return CompletionResult {
            suggestions,
            ghost_text: None,
            context_kind: ContextKind::CommandName,
        };
    }

    let Some(command_token) = info.tokens.first() else {
        return CompletionResult::empty();
    };
    let Some(spec) = registry.get(&command_token.text) else {
        debug!(command = %command_token.text, "unknown command");
        return CompletionResult::empty();
    };

    // Fold every settled token over the grammar. Tokens at or right of the
    // cursor are never walked; the active token is only scored.
    let state = info
        .tokens
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(index, token)| match info.active_token {
            Some(active) => *index < active,
            None => token.end < cursor,
        })
        .fold(WalkState::initial(spec), |state, (_, token)| {
            state.walk_token(&token.text)
        });

    if state.free_text_reached {
        debug!(command = %spec.name, "free text reached; completion disabled");
        return CompletionResult::empty();
    }

    let prefix = info.active_prefix.as_str();
    let ghost_text = if prefix.is_empty() {
        ghost::ghost_text(&state, config.ghost_max_width)
    } else {
        None
    };

    let (items, context_kind) = if prefix.starts_with('-') {
        let items =
            suggest::flag_name_suggestions(&state, prefix, info.replace_start, info.replace_end);
        (items, ContextKind::FlagName)
    } else if let Some(flag) = state.pending_flag_value {
        let items = suggest::flag_value_suggestions(
            flag,
            prefix,
            info.replace_start,
            info.replace_end,
            providers,
        );
        (items, ContextKind::FlagValue)
    } else {
        let items = suggest::positional_suggestions(
            &state,
            prefix,
            info.replace_start,
            info.replace_end,
            providers,
        );
        let context_kind = if state.current_nodes.iter().any(|n| n.as_literal().is_some()) {
            ContextKind::Subcommand
        } else if state.current_nodes.iter().any(|n| n.as_argument().is_some()) {
            ContextKind::Argument
        } else if !items.is_empty() {
            ContextKind::FlagName
        } else {
            ContextKind::None
        };
        (items, context_kind)
    };

    let suggestions = suggest::finalize(items, config.max_suggestions);
    debug!(
        command = %spec.name,
        context = %context_kind,
        count = suggestions.len(),
        ghost = ghost_text.is_some(),
        "resolved completion"
    );
    CompletionResult {
        suggestions,
        ghost_text,
        context_kind,
    }
}
