//! Suggestion synthesis for each completion context.
//!
//! Every function here scores candidates with the shared tiered scorer and
//! tags them with the active token's replace range, so acceptance is always
//! a verbatim, surgical splice. Sorting and capping happen once, in
//! [`finalize`].

use slashline_registry::CommandRegistry;
use slashline_types::{ArgKind, CompletionSuggestion, FlagKind, FlagSpec, SuggestionKind};
use slashline_util::score_candidate;

use crate::provider::ProviderContext;
use crate::walk::WalkState;

/// Score penalty keeping flag names below positional suggestions when both
/// are offered for an empty prefix.
const FLAG_SCORE_PENALTY: f64 = 100.0;

/// Suggestions for the command-name token.
///
/// Only primary names are scored and surfaced; aliases resolve through the
/// registry but never appear as separate completions.
pub(crate) fn command_name_suggestions(
    registry: &CommandRegistry,
    prefix: &str,
    replace_start: usize,
    replace_end: usize,
) -> Vec<CompletionSuggestion> {
    let query = prefix.strip_prefix('/').unwrap_or(prefix);
    let mut items = Vec::new();
    for spec in registry.iter() {
        let Some(score) = score_candidate(query, &spec.name) else {
            continue;
        };
        items.push(CompletionSuggestion {
            label: format!("/{}", spec.name),
            insert_text: format!("/{}", spec.name),
            detail: Some(spec.description.clone()),
            kind: SuggestionKind::Command,
            score,
            replace_start,
            replace_end,
        });
    }
    items
}

/// Flag-name suggestions from the flags accumulated so far, excluding
/// already-used non-repeatable flags.
pub(crate) fn flag_name_suggestions(
    state: &WalkState<'_>,
    prefix: &str,
    replace_start: usize,
    replace_end: usize,
) -> Vec<CompletionSuggestion> {
    let query = prefix.trim_start_matches('-');
    let mut items = Vec::new();
    for flag in &state.available_flags {
        if state.flag_exhausted(flag) {
            continue;
        }
        let Some(score) = score_candidate(query, &flag.name) else {
            continue;
        };
        items.push(CompletionSuggestion {
            label: format!("--{}", flag.name),
            insert_text: format!("--{}", flag.name),
            detail: flag.description.clone(),
            kind: SuggestionKind::Flag,
            score,
            replace_start,
            replace_end,
        });
    }
    items
}

/// Value suggestions for the flag whose value the active token will become.
pub(crate) fn flag_value_suggestions(
    flag: &FlagSpec,
    prefix: &str,
    replace_start: usize,
    replace_end: usize,
    providers: &dyn ProviderContext,
) -> Vec<CompletionSuggestion> {
    let candidates = if !flag.enum_values.is_empty() {
        flag.enum_values.clone()
    } else if flag.kind == FlagKind::DynamicEnum
        && let Some(provider_id) = flag.provider_id.as_deref()
    {
        providers.resolve_values(provider_id)
    } else {
        Vec::new()
    };

    scored_values(&candidates, prefix, SuggestionKind::Value, flag.description.clone(), replace_start, replace_end)
}

/// Subcommand and argument-value suggestions for the current node set, plus
/// penalized flag names while the prefix is empty.
pub(crate) fn positional_suggestions(
    state: &WalkState<'_>,
    prefix: &str,
    replace_start: usize,
    replace_end: usize,
    providers: &dyn ProviderContext,
) -> Vec<CompletionSuggestion> {
    let mut items = Vec::new();

    for node in &state.current_nodes {
        if let Some(value) = node.as_literal() {
            if let Some(score) = score_candidate(prefix, value) {
                items.push(CompletionSuggestion {
                    label: value.to_string(),
                    insert_text: value.to_string(),
                    detail: None,
                    kind: SuggestionKind::Subcommand,
                    score,
                    replace_start,
                    replace_end,
                });
            }
            continue;
        }

        let Some(arg) = node.as_argument() else {
            continue;
        };
        let candidates = match arg.kind {
            ArgKind::Enum => arg.enum_values.clone(),
            ArgKind::DynamicEnum => arg
                .provider_id
                .as_deref()
                .map(|id| providers.resolve_values(id))
                .unwrap_or_default(),
            _ => continue,
        };
        items.extend(scored_values(
            &candidates,
            prefix,
            SuggestionKind::Argument,
            arg.description.clone(),
            replace_start,
            replace_end,
        ));
    }

    // Keep flags discoverable while nothing has been typed, but always
    // after the positional candidates.
    if prefix.is_empty() {
        for mut flag in flag_name_suggestions(state, "", replace_start, replace_end) {
            flag.score += FLAG_SCORE_PENALTY;
            items.push(flag);
        }
    }

    items
}

/// Sort ascending by score, break ties lexicographically by label, cap.
pub(crate) fn finalize(mut items: Vec<CompletionSuggestion>, max: usize) -> Vec<CompletionSuggestion> {
    items.sort_by(|a, b| a.score.total_cmp(&b.score).then_with(|| a.label.cmp(&b.label)));
    items.truncate(max);
    items
}

fn scored_values(
    candidates: &[String],
    prefix: &str,
    kind: SuggestionKind,
    detail: Option<String>,
    replace_start: usize,
    replace_end: usize,
) -> Vec<CompletionSuggestion> {
    let mut items = Vec::new();
    for candidate in candidates {
        let Some(score) = score_candidate(prefix, candidate) else {
            continue;
        };
        items.push(CompletionSuggestion {
            label: candidate.clone(),
            insert_text: candidate.clone(),
            detail: detail.clone(),
            kind,
            score,
            replace_start,
            replace_end,
        });
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::StaticProviderContext;
    use slashline_types::{ArgSpec, CommandNode, CommandSpec};

    fn daemon_spec() -> CommandSpec {
        CommandSpec::new("daemon", "Manage daemons", "/daemon <subcommand>")
            .flag(FlagSpec::boolean("verbose"))
            .node(CommandNode::literal("add"))
            .node(CommandNode::literal("remove"))
            .node(CommandNode::literal("list"))
    }

    #[test]
    fn flag_suggestions_sort_after_subcommands_for_empty_prefix() {
        let spec = daemon_spec();
        let state = WalkState::initial(&spec);
        let providers = StaticProviderContext::default();
        let items = finalize(positional_suggestions(&state, "", 8, 8, &providers), 20);

        let labels: Vec<&str> = items.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["add", "list", "remove", "--verbose"]);
        assert!(items[3].score >= FLAG_SCORE_PENALTY);
    }

    #[test]
    fn used_non_repeatable_flags_are_excluded() {
        let spec = daemon_spec();
        let state = WalkState::initial(&spec).walk_token("--verbose");
        let items = flag_name_suggestions(&state, "--", 8, 8);
        assert!(items.is_empty());
    }

    #[test]
    fn repeatable_flags_stay_suggestible() {
        let spec = CommandSpec::new("daemon", "Manage daemons", "/daemon")
            .node(CommandNode::literal("add").flag(FlagSpec::string("tag").repeatable()));
        let state = WalkState::initial(&spec)
            .walk_token("add")
            .walk_token("--tag")
            .walk_token("alpha");
        let items = flag_name_suggestions(&state, "--ta", 12, 16);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "--tag");
    }

    #[test]
    fn dynamic_argument_values_come_from_the_provider_snapshot() {
        let spec = CommandSpec::new("model", "Switch model", "/model [name]")
            .node(CommandNode::argument(ArgSpec::dynamic("name", "models")));
        let state = WalkState::initial(&spec);
        let providers =
            StaticProviderContext::default().with_values("models", &["claude-sonnet-4", "gpt-4o"]);

        let items = positional_suggestions(&state, "cla", 7, 10, &providers);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "claude-sonnet-4");
        assert_eq!(items[0].kind, SuggestionKind::Argument);
    }

    #[test]
    fn unknown_provider_ids_yield_no_suggestions() {
        let spec = CommandSpec::new("theme", "Change theme", "/theme <name>")
            .node(CommandNode::argument(ArgSpec::dynamic("name", "themes")));
        let state = WalkState::initial(&spec);
        let providers = StaticProviderContext::default();
        let items = positional_suggestions(&state, "", 7, 7, &providers);
        assert!(items.is_empty());
    }

    #[test]
    fn finalize_orders_by_score_then_label() {
        let mk = |label: &str, score: f64| CompletionSuggestion {
            label: label.into(),
            insert_text: label.into(),
            detail: None,
            kind: SuggestionKind::Value,
            score,
            replace_start: 0,
            replace_end: 0,
        };
        let items = finalize(vec![mk("b", 10.0), mk("a", 10.0), mk("c", 0.0)], 2);
        let labels: Vec<&str> = items.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["c", "a"]);
    }
}
