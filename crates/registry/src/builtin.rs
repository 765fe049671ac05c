//! Builtin slash-command catalog.
//!
//! The specs here describe the assistant client's command surface: what may
//! follow each command word, which flags exist at which depth, and where
//! dynamic values come from. Handlers that execute these commands live in
//! the embedding application; this catalog only drives completion.

use once_cell::sync::Lazy;
use slashline_types::{ArgKind, ArgSpec, CommandNode, CommandSpec, FlagSpec};

use crate::models::CommandRegistry;

static BUILTIN: Lazy<CommandRegistry> = Lazy::new(|| {
    CommandRegistry::from_specs(builtin_specs()).expect("builtin command catalog is well-formed")
});

/// The process-wide registry over the builtin catalog. Built once on first
/// access and never mutated.
pub fn builtin() -> &'static CommandRegistry {
    &BUILTIN
}

/// All builtin command specifications, in display order.
pub fn builtin_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new("help", "Show available commands", "/help [command]")
            .alias("h")
            .alias("?")
            .node(CommandNode::argument(
                ArgSpec::dynamic("command", "commands")
                    .optional()
                    .placeholder("command")
                    .description("Command to show detailed help for"),
            )),
        CommandSpec::new("model", "Switch the active model", "/model [name]")
            .alias("m")
            .node(CommandNode::argument(
                ArgSpec::dynamic("name", "models")
                    .optional()
                    .placeholder("model")
                    .description("Model to switch to"),
            )),
        CommandSpec::new("theme", "Change the color theme", "/theme <name>").node(
            CommandNode::argument(
                ArgSpec::dynamic("name", "themes").description("Theme to activate"),
            ),
        ),
        CommandSpec::new("env", "Select the active environment", "/env <name>")
            .alias("environment")
            .node(CommandNode::argument(
                ArgSpec::dynamic("name", "environments").description("Environment to activate"),
            )),
        CommandSpec::new("memory", "Inspect and edit persisted memories", "/memory <subcommand>")
            .flag(FlagSpec::boolean("json").description("Emit raw JSON output"))
            .node(
                CommandNode::literal("list")
                    .flag(
                        FlagSpec::enumerated("type", &["fact", "preference", "note"])
                            .alias("t")
                            .description("Only list memories of this type"),
                    )
                    .flag(
                        FlagSpec::integer("limit")
                            .alias("n")
                            .description("Maximum number of entries to list"),
                    ),
            )
            .node(CommandNode::literal("add").child(CommandNode::argument(
                ArgSpec::new("text", ArgKind::FreeText)
                    .placeholder("text to remember"),
            )))
            .node(CommandNode::literal("forget").child(CommandNode::argument(
                ArgSpec::new("id", ArgKind::String).placeholder("memory-id"),
            )))
            .node(CommandNode::literal("export").child(CommandNode::argument(
                ArgSpec::new("file", ArgKind::Path).placeholder("file"),
            ))),
        CommandSpec::new("daemon", "Manage daemon connection profiles", "/daemon <subcommand>")
            .flag(
                FlagSpec::boolean("verbose")
                    .alias("v")
                    .description("Log connection details"),
            )
            .node(
                CommandNode::literal("add")
                    .flag(
                        FlagSpec::string("tag")
                            .repeatable()
                            .description("Label the profile; may repeat"),
                    )
                    .child(
                        CommandNode::argument(
                            ArgSpec::new("name", ArgKind::String)
                                .placeholder("name"),
                        )
                        .child(CommandNode::argument(
                            ArgSpec::new("url", ArgKind::String)
                                .placeholder("url"),
                        )),
                    ),
            )
            .node(CommandNode::literal("remove").child(CommandNode::argument(
                ArgSpec::dynamic("name", "daemons").description("Profile to remove"),
            )))
            .node(CommandNode::literal("use").child(CommandNode::argument(
                ArgSpec::dynamic("name", "daemons").description("Profile to connect to"),
            )))
            .node(CommandNode::literal("list")),
        CommandSpec::new("remember", "Store a memory from free text", "/remember <text>").node(
            CommandNode::argument(
                ArgSpec::new("text", ArgKind::FreeText)
                    .placeholder("text to remember"),
            ),
        ),
        CommandSpec::new("clear", "Clear the conversation", "/clear").alias("cls"),
        CommandSpec::new("quit", "Exit the client", "/quit").alias("exit").alias("q"),
    ]
}
