use std::sync::Arc;

use anyhow::Context;
use indexmap::IndexMap;
use slashline_types::CommandSpec;
use thiserror::Error;

/// Error raised while assembling a [`CommandRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two specs claimed the same case-insensitive name or alias.
    #[error("duplicate command name or alias: {0}")]
    DuplicateName(String),
}

/// The lookup table over all registered slash commands.
///
/// Specs are shared: every alias entry in the table points at the same
/// `Arc<CommandSpec>` as the primary name entry. The registry is built once
/// and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<CommandSpec>>,
    by_name: IndexMap<String, Arc<CommandSpec>>,
}

impl CommandRegistry {
    /// Build a registry from owned specs, rejecting case-insensitive
    /// name/alias collisions.
    pub fn from_specs(specs: Vec<CommandSpec>) -> Result<Self, RegistryError> {
        let mut registry = CommandRegistry::default();
        for spec in specs {
            registry.insert(spec)?;
        }
        Ok(registry)
    }

    /// Build a registry from a JSON manifest holding an array of
    /// [`CommandSpec`] values.
    ///
    /// This is the embedder hook for shipping extra command catalogs next to
    /// the builtins.
    pub fn from_json_manifest(manifest: &str) -> anyhow::Result<Self> {
        let specs: Vec<CommandSpec> =
            serde_json::from_str(manifest).context("parse command manifest JSON")?;
        Self::from_specs(specs).context("build command registry from manifest")
    }

    fn insert(&mut self, spec: CommandSpec) -> Result<(), RegistryError> {
        let spec = Arc::new(spec);
        let mut keys = Vec::with_capacity(1 + spec.aliases.len());
        keys.push(spec.name.to_lowercase());
        keys.extend(spec.aliases.iter().map(|alias| alias.to_lowercase()));

        for key in &keys {
            if self.by_name.contains_key(key) {
                return Err(RegistryError::DuplicateName(key.clone()));
            }
        }
        for key in keys {
            self.by_name.insert(key, Arc::clone(&spec));
        }
        self.commands.push(spec);
        Ok(())
    }

    /// Look up a spec by primary name or alias, case-insensitively.
    ///
    /// One leading slash is tolerated, so `get("/model")` and `get("model")`
    /// resolve identically.
    pub fn get(&self, name_or_alias: &str) -> Option<&Arc<CommandSpec>> {
        let bare = name_or_alias.strip_prefix('/').unwrap_or(name_or_alias);
        self.by_name.get(&bare.to_lowercase())
    }

    /// Enumerate all specs in declaration order, one entry per command.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CommandSpec>> {
        self.commands.iter()
    }

    /// Primary command names in declaration order.
    ///
    /// Useful as the snapshot behind a "commands" value provider.
    pub fn command_names(&self) -> Vec<String> {
        self.commands.iter().map(|spec| spec.name.clone()).collect()
    }

    /// Number of registered commands (aliases not counted).
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slashline_types::CommandSpec;

    fn spec(name: &str, aliases: &[&str]) -> CommandSpec {
        let mut spec = CommandSpec::new(name, format!("{name} command"), format!("/{name}"));
        for alias in aliases {
            spec = spec.alias(*alias);
        }
        spec
    }

    #[test]
    fn alias_and_name_resolve_to_the_same_spec() {
        let registry = CommandRegistry::from_specs(vec![spec("quit", &["exit", "q"])]).unwrap();
        let by_name = registry.get("quit").expect("primary name resolves");
        let by_alias = registry.get("exit").expect("alias resolves");
        assert!(Arc::ptr_eq(by_name, by_alias));
        assert!(Arc::ptr_eq(by_name, registry.get("q").unwrap()));
    }

    #[test]
    fn lookup_is_case_insensitive_and_tolerates_a_leading_slash() {
        let registry = CommandRegistry::from_specs(vec![spec("Model", &[])]).unwrap();
        assert!(registry.get("model").is_some());
        assert!(registry.get("MODEL").is_some());
        assert!(registry.get("/model").is_some());
        assert!(registry.get("//model").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = CommandRegistry::from_specs(vec![spec("help", &[]), spec("HELP", &[])])
            .expect_err("duplicate should fail");
        assert!(matches!(err, RegistryError::DuplicateName(name) if name == "help"));
    }

    #[test]
    fn alias_colliding_with_existing_name_is_rejected() {
        let result = CommandRegistry::from_specs(vec![spec("quit", &[]), spec("leave", &["quit"])]);
        assert!(result.is_err());
    }

    #[test]
    fn manifest_loading_round_trips_specs() {
        let manifest = r#"[
            {"name": "ping", "description": "Check daemon health", "usage": "/ping"}
        ]"#;
        let registry = CommandRegistry::from_json_manifest(manifest).expect("manifest parses");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("ping").unwrap().usage, "/ping");
    }

    #[test]
    fn malformed_manifest_reports_context() {
        let err = CommandRegistry::from_json_manifest("{not json").expect_err("should fail");
        assert!(err.to_string().contains("manifest"));
    }
}
