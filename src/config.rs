use std::path::Path;

use crate::ai::{Agent, AgentKind};
use crate::error::ConfigError;

/// One side of a match-up: which strategy plays and, for the recursive
/// searchers, how deep it looks.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct AgentConfig {
    pub agent: AgentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
}

impl AgentConfig {
    /// Construct the configured agent, applying the kind's default depth
    /// when none is set.
    pub fn build(&self) -> Result<Box<dyn Agent>, ConfigError> {
        Ok(self.agent.build(self.depth)?)
    }
}

/// Match configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub red: AgentConfig,
    pub yellow: AgentConfig,
    pub games: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        // The original pairing: pruned search against plain minimax
        MatchConfig {
            red: AgentConfig {
                agent: AgentKind::AlphaBeta,
                depth: None,
            },
            yellow: AgentConfig {
                agent: AgentKind::Minimax,
                depth: None,
            },
            games: 1,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.red.depth == Some(0) {
            return Err(ConfigError::Validation("red.depth must be >= 1".into()));
        }
        if self.yellow.depth == Some(0) {
            return Err(ConfigError::Validation("yellow.depth must be >= 1".into()));
        }
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be >= 1".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&MatchConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_default_pairing() {
        let config = MatchConfig::default();
        assert_eq!(config.red.agent, AgentKind::AlphaBeta);
        assert_eq!(config.yellow.agent, AgentKind::Minimax);
        assert_eq!(config.games, 1);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[red]
agent = "greedy"
"#;
        let config: MatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.red.agent, AgentKind::Greedy);
        assert_eq!(config.red.depth, None);
        // Other fields should be defaults
        assert_eq!(config.yellow.agent, AgentKind::Minimax);
        assert_eq!(config.games, 1);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: MatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.red.agent, AgentKind::AlphaBeta);
        assert_eq!(config.yellow.agent, AgentKind::Minimax);
    }

    #[test]
    fn test_depth_is_read_from_toml() {
        let toml_str = r#"
[red]
agent = "alpha_beta"
depth = 5

[yellow]
agent = "minimax"
depth = 2
"#;
        let config: MatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.red.depth, Some(5));
        assert_eq!(config.yellow.depth, Some(2));
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = MatchConfig::default();
        config.red.depth = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = MatchConfig::default();
        config.games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_agent_kind_fails_to_parse() {
        let toml_str = r#"
[red]
agent = "a_star"
"#;
        assert!(toml::from_str::<MatchConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = MatchConfig::load_or_default(Path::new("nonexistent_match.toml")).unwrap();
        assert_eq!(config.games, 1);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
games = 5

[yellow]
agent = "best_first_scan"
"#
        )
        .unwrap();

        let config = MatchConfig::load(&path).unwrap();
        assert_eq!(config.games, 5);
        assert_eq!(config.yellow.agent, AgentKind::BestFirstScan);
        // Others are defaults
        assert_eq!(config.red.agent, AgentKind::AlphaBeta);
    }

    #[test]
    fn test_load_rejects_invalid_depth_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("match.toml");
        std::fs::write(&path, "[red]\nagent = \"minimax\"\ndepth = 0\n").unwrap();
        assert!(MatchConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = MatchConfig::default_toml();
        let config: MatchConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }

    #[test]
    fn test_built_agents_carry_their_names() {
        let config = MatchConfig::default();
        assert_eq!(config.red.build().unwrap().name(), "AlphaBeta");
        assert_eq!(config.yellow.build().unwrap().name(), "Minimax");
    }
}
