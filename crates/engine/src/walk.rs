//! Grammar walking over settled tokens.
//!
//! The walker folds every settled token (all tokens strictly left of the
//! active one) over a command's argument tree. Each step consumes one token
//! and returns a fresh state; nothing is mutated in place, so a caller can
//! keep intermediate states around freely.

use std::collections::HashSet;

use slashline_types::{ArgKind, CommandNode, CommandSpec, FlagSpec};
use tracing::trace;

/// Accumulated walk position inside one command's grammar.
#[derive(Debug, Clone)]
pub struct WalkState<'g> {
    /// Candidate nodes at the current depth
    pub current_nodes: Vec<&'g CommandNode>,
    /// Flags merged from the command level and every matched node so far;
    /// accumulated and never removed
    pub available_flags: Vec<&'g FlagSpec>,
    /// Lowercased names of flags already used
    pub used_flags: HashSet<String>,
    /// Flag whose value the next token will be consumed as
    pub pending_flag_value: Option<&'g FlagSpec>,
    /// Latched once a free-text argument is consumed; monotone for the
    /// remainder of the walk
    pub free_text_reached: bool,
}

impl<'g> WalkState<'g> {
    /// Seed the walk at a command's root.
    pub fn initial(spec: &'g CommandSpec) -> Self {
        WalkState {
            current_nodes: spec.root.iter().collect(),
            available_flags: spec.flags.iter().collect(),
            used_flags: HashSet::new(),
            pending_flag_value: None,
            free_text_reached: false,
        }
    }

    /// Consume one settled token and return the successor state.
    pub fn walk_token(self, token: &str) -> Self {
        if self.free_text_reached {
            return self;
        }

        if let Some(flag) = self.pending_flag_value {
            trace!(flag = %flag.name, value = token, "consumed pending flag value");
            return Self {
                pending_flag_value: None,
                ..self
            };
        }

        if token.starts_with('-') && token.chars().count() > 1 {
            return self.walk_flag_token(token);
        }

        let literal = self
            .current_nodes
            .iter()
            .copied()
            .find(|node| node.as_literal().is_some_and(|value| value.eq_ignore_ascii_case(token)));
        if let Some(node) = literal {
            trace!(literal = token, "descended into literal node");
            return self.descend(node);
        }

        let argument = self
            .current_nodes
            .iter()
            .copied()
            .find_map(|node| node.as_argument().map(|arg| (node, arg)));
        if let Some((node, arg)) = argument {
            if arg.kind == ArgKind::FreeText {
                trace!(argument = %arg.name, "free-text argument reached");
                return Self {
                    free_text_reached: true,
                    ..self
                };
            }
            trace!(argument = %arg.name, value = token, "consumed argument value");
            return self.descend(node);
        }

        // Grammar exhausted at this depth; later flags stay resolvable.
        Self {
            current_nodes: Vec::new(),
            ..self
        }
    }

    /// Resolve a `-`-prefixed token against the accumulated flags.
    ///
    /// Accepts `--flag=value` (split once on the first `=`). Unrecognized
    /// flag-shaped tokens are silently absorbed.
    fn walk_flag_token(self, token: &str) -> Self {
        let (name_part, inline_value) = match token.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (token, None),
        };
        let bare = name_part.trim_start_matches('-');

        let Some(flag) = self.available_flags.iter().copied().find(|f| f.matches(bare)) else {
            trace!(token, "absorbed unrecognized flag token");
            return self;
        };

        let pending = (flag.kind.takes_value() && inline_value.is_none()).then_some(flag);
        let mut next = self;
        next.used_flags.insert(flag.name.to_lowercase());
        next.pending_flag_value = pending;
        next
    }

    fn descend(self, node: &'g CommandNode) -> Self {
        let mut next = self;
        next.current_nodes = node.children().iter().collect();
        next.available_flags.extend(node.flags());
        next
    }

    /// Whether `flag` was already used and may not appear again.
    pub fn flag_exhausted(&self, flag: &FlagSpec) -> bool {
        !flag.repeatable && self.used_flags.contains(&flag.name.to_lowercase())
    }
}
