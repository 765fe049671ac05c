//! Shared type definitions for the slashline completion engine.
//!
//! This crate holds the declarative command grammar (specs, nodes, argument
//! and flag descriptors) and the value types the engine emits (suggestions,
//! completion results). The grammar is plain immutable data: registries build
//! it once at startup and every other crate only reads it.

use serde::{Deserialize, Serialize};

/// Value kind of a positional argument node.
///
/// Literal path segments are not an argument kind; they are the
/// [`CommandNode::Literal`] variant of the node union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    /// Arbitrary single-token string value
    String,
    /// Value drawn from a static list declared on the spec
    Enum,
    /// Value resolved at completion time through a provider id
    DynamicEnum,
    /// Integer value; completion offers no candidates
    Integer,
    /// Filesystem path value; completion offers no candidates
    Path,
    /// Terminal kind consuming every remaining token verbatim
    FreeText,
}

/// Declares a positional argument within a command tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgSpec {
    /// The name of the argument (e.g., "name", "url")
    pub name: String,
    /// Value kind driving walking and suggestion behavior
    pub kind: ArgKind,
    /// Whether the command is complete without this argument
    #[serde(default)]
    pub optional: bool,
    /// Valid values when `kind` is [`ArgKind::Enum`]
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// Provider id consulted when `kind` is [`ArgKind::DynamicEnum`]
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Ghost-text placeholder shown instead of the argument name
    #[serde(default)]
    pub placeholder: Option<String>,
    /// Human-readable description of the argument
    #[serde(default)]
    pub description: Option<String>,
}

impl ArgSpec {
    /// Create an argument spec of the given kind with no extras.
    pub fn new(name: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            enum_values: Vec::new(),
            provider_id: None,
            placeholder: None,
            description: None,
        }
    }

    /// Create an enum argument with its static candidate values.
    pub fn enumerated(name: impl Into<String>, values: &[&str]) -> Self {
        let mut spec = Self::new(name, ArgKind::Enum);
        spec.enum_values = values.iter().map(|v| v.to_string()).collect();
        spec
    }

    /// Create a dynamic-enum argument resolved through `provider_id`.
    pub fn dynamic(name: impl Into<String>, provider_id: impl Into<String>) -> Self {
        let mut spec = Self::new(name, ArgKind::DynamicEnum);
        spec.provider_id = Some(provider_id.into());
        spec
    }

    /// Mark the argument optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Override the ghost-text placeholder (rendered as `<placeholder>`).
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Attach a human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Placeholder text for ghost rendering, falling back to the name.
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(&self.name)
    }
}

/// Value kind of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlagKind {
    /// Presence-only flag; never consumes a value token
    Boolean,
    /// Value drawn from a static list declared on the spec
    Enum,
    /// Value resolved at completion time through a provider id
    DynamicEnum,
    /// Arbitrary single-token string value
    String,
    /// Integer value; completion offers no candidates
    Integer,
}

impl FlagKind {
    /// Whether a flag of this kind consumes a following value token.
    pub fn takes_value(&self) -> bool {
        !matches!(self, FlagKind::Boolean)
    }
}

/// Declares a named flag accepted by a command or a subtree of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlagSpec {
    /// Flag name without leading dashes (e.g., "type", "limit")
    pub name: String,
    /// Alternative names, also without dashes (e.g., "t")
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Value kind driving walking and suggestion behavior
    pub kind: FlagKind,
    /// Valid values when `kind` is [`FlagKind::Enum`]
    #[serde(default)]
    pub enum_values: Vec<String>,
    /// Provider id consulted when `kind` is [`FlagKind::DynamicEnum`]
    #[serde(default)]
    pub provider_id: Option<String>,
    /// Whether the flag may appear more than once
    #[serde(default)]
    pub repeatable: bool,
    /// Human-readable description of the flag
    #[serde(default)]
    pub description: Option<String>,
}

impl FlagSpec {
    fn new(name: impl Into<String>, kind: FlagKind) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            kind,
            enum_values: Vec::new(),
            provider_id: None,
            repeatable: false,
            description: None,
        }
    }

    /// Create a boolean (presence-only) flag.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Boolean)
    }

    /// Create a string-valued flag.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::String)
    }

    /// Create an integer-valued flag.
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FlagKind::Integer)
    }

    /// Create an enum flag with its static candidate values.
    pub fn enumerated(name: impl Into<String>, values: &[&str]) -> Self {
        let mut flag = Self::new(name, FlagKind::Enum);
        flag.enum_values = values.iter().map(|v| v.to_string()).collect();
        flag
    }

    /// Create a dynamic-enum flag resolved through `provider_id`.
    pub fn dynamic(name: impl Into<String>, provider_id: impl Into<String>) -> Self {
        let mut flag = Self::new(name, FlagKind::DynamicEnum);
        flag.provider_id = Some(provider_id.into());
        flag
    }

    /// Add an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Allow the flag to repeat.
    pub fn repeatable(mut self) -> Self {
        self.repeatable = true;
        self
    }

    /// Attach a human-readable description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-insensitive match of a dashless token against name or aliases.
    pub fn matches(&self, candidate: &str) -> bool {
        self.name.eq_ignore_ascii_case(candidate)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(candidate))
    }
}

/// One node of a command's argument tree.
///
/// A tree is rooted at [`CommandSpec::root`] and is acyclic by construction:
/// children are owned values, so a node cannot reference an ancestor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandNode {
    /// Fixed subcommand word matched case-insensitively
    Literal {
        /// The literal text of the subcommand (e.g., "list")
        value: String,
        /// Nodes reachable after this one
        #[serde(default)]
        children: Vec<CommandNode>,
        /// Flags that become available once this node is matched
        #[serde(default)]
        flags: Vec<FlagSpec>,
    },
    /// Positional argument slot
    Argument {
        /// The argument descriptor
        arg: ArgSpec,
        /// Nodes reachable after this one
        #[serde(default)]
        children: Vec<CommandNode>,
        /// Flags that become available once this node is matched
        #[serde(default)]
        flags: Vec<FlagSpec>,
    },
}

impl CommandNode {
    /// Create a literal node with no children or flags.
    pub fn literal(value: impl Into<String>) -> Self {
        CommandNode::Literal {
            value: value.into(),
            children: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Create an argument node with no children or flags.
    pub fn argument(arg: ArgSpec) -> Self {
        CommandNode::Argument {
            arg,
            children: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Append a child node.
    pub fn child(mut self, node: CommandNode) -> Self {
        match &mut self {
            CommandNode::Literal { children, .. } | CommandNode::Argument { children, .. } => {
                children.push(node);
            }
        }
        self
    }

    /// Append a flag scoped to this node's subtree.
    pub fn flag(mut self, flag: FlagSpec) -> Self {
        match &mut self {
            CommandNode::Literal { flags, .. } | CommandNode::Argument { flags, .. } => {
                flags.push(flag);
            }
        }
        self
    }

    /// Nodes reachable after this one.
    pub fn children(&self) -> &[CommandNode] {
        match self {
            CommandNode::Literal { children, .. } | CommandNode::Argument { children, .. } => children,
        }
    }

    /// Flags introduced by this node.
    pub fn flags(&self) -> &[FlagSpec] {
        match self {
            CommandNode::Literal { flags, .. } | CommandNode::Argument { flags, .. } => flags,
        }
    }

    /// The literal value, if this is a literal node.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            CommandNode::Literal { value, .. } => Some(value),
            CommandNode::Argument { .. } => None,
        }
    }

    /// The argument descriptor, if this is an argument node.
    pub fn as_argument(&self) -> Option<&ArgSpec> {
        match self {
            CommandNode::Argument { arg, .. } => Some(arg),
            CommandNode::Literal { .. } => None,
        }
    }
}

/// Represents a complete slash-command specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Primary command name without the leading slash (e.g., "memory")
    pub name: String,
    /// Alternative names; resolve to the same spec but never surface as
    /// separate completions
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Brief description of what the command does
    pub description: String,
    /// Usage pattern shown in help (e.g., "/memory list [--type <type>]")
    pub usage: String,
    /// Root nodes of the argument tree
    #[serde(default)]
    pub root: Vec<CommandNode>,
    /// Flags available anywhere in the command
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl CommandSpec {
    /// Create a spec with no tree or flags.
    pub fn new(name: impl Into<String>, description: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: description.into(),
            usage: usage.into(),
            root: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Add an alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Append a root node.
    pub fn node(mut self, node: CommandNode) -> Self {
        self.root.push(node);
        self
    }

    /// Append a command-level flag.
    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }
}

/// Represents the type of a completion suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    /// A command name (e.g., "/model")
    Command,
    /// A literal subcommand word (e.g., "list")
    Subcommand,
    /// A value for a positional argument
    Argument,
    /// A flag name (e.g., "--type")
    Flag,
    /// A value for a flag
    Value,
}

/// A single scored completion candidate.
#[derive(Debug, Clone)]
pub struct CompletionSuggestion {
    /// Text shown in the suggestion list
    pub label: String,
    /// Text spliced into the input when the suggestion is accepted
    pub insert_text: String,
    /// Optional secondary text (e.g., a command description)
    pub detail: Option<String>,
    /// The type of suggestion
    pub kind: SuggestionKind,
    /// Rank score; lower is better
    pub score: f64,
    /// Char offset where acceptance starts replacing
    pub replace_start: usize,
    /// Char offset where acceptance stops replacing (exclusive)
    pub replace_end: usize,
}

/// What the cursor position was resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextKind {
    /// No completion context (non-command input, unknown command, free text)
    #[default]
    None,
    /// Inside the command-name token
    CommandName,
    /// Choosing among literal subcommand words
    Subcommand,
    /// Entering a positional argument value
    Argument,
    /// Entering a flag name
    FlagName,
    /// Entering the value of a flag
    FlagValue,
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ContextKind::None => "none",
            ContextKind::CommandName => "command-name",
            ContextKind::Subcommand => "subcommand",
            ContextKind::Argument => "argument",
            ContextKind::FlagName => "flag-name",
            ContextKind::FlagValue => "flag-value",
        };
        f.write_str(label)
    }
}

/// Everything a caller needs to render completion for one input state.
#[derive(Debug, Clone, Default)]
pub struct CompletionResult {
    /// Candidates sorted ascending by score, ties broken by label
    pub suggestions: Vec<CompletionSuggestion>,
    /// Inline placeholder; present only while the active token is empty
    pub ghost_text: Option<String>,
    /// The resolved completion context
    pub context_kind: ContextKind,
}

impl CompletionResult {
    /// The neutral result every unresolved situation degrades to.
    pub fn empty() -> Self {
        Self::default()
    }
}
