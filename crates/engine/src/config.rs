use serde::{Deserialize, Serialize};

/// Tunables for completion resolution.
///
/// Embedders deserialize this from their own settings surface; the engine
/// itself never touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    /// Maximum number of suggestions returned per resolution
    pub max_suggestions: usize,
    /// Display-column budget for ghost text
    pub ghost_max_width: usize,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 20,
            ghost_max_width: 48,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: CompletionConfig = serde_json::from_str(r#"{"max_suggestions": 5}"#).unwrap();
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.ghost_max_width, CompletionConfig::default().ghost_max_width);
    }
}
