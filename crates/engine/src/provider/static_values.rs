use std::collections::HashMap;

use super::ProviderContext;

/// Pre-resolved provider snapshot keyed by provider id.
///
/// Callers populate this once per keystroke (or cache it across keystrokes)
/// from whatever live sources they have, then hand it to the resolver. The
/// engine never knows whether a value list came from a daemon, a config
/// file, or a test fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticProviderContext {
    values: HashMap<String, Vec<String>>,
}

impl StaticProviderContext {
    /// Builder-style variant of [`StaticProviderContext::insert`].
    pub fn with_values(mut self, provider_id: impl Into<String>, values: &[&str]) -> Self {
        self.insert(provider_id, values.iter().map(|v| v.to_string()).collect());
        self
    }

    /// Set the snapshot for one provider id, replacing any previous values.
    pub fn insert(&mut self, provider_id: impl Into<String>, values: Vec<String>) {
        self.values.insert(provider_id.into(), values);
    }
}

impl ProviderContext for StaticProviderContext {
    fn resolve_values(&self, provider_id: &str) -> Vec<String> {
        self.values.get(provider_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ids_and_returns_empty_for_unknown_ones() {
        let ctx = StaticProviderContext::default()
            .with_values("themes", &["dark", "light"]);
        assert_eq!(ctx.resolve_values("themes"), vec!["dark", "light"]);
        assert!(ctx.resolve_values("models").is_empty());
    }

    #[test]
    fn inserting_twice_replaces_the_snapshot() {
        let mut ctx = StaticProviderContext::default();
        ctx.insert("models", vec!["a".into()]);
        ctx.insert("models", vec!["b".into()]);
        assert_eq!(ctx.resolve_values("models"), vec!["b"]);
    }
}
