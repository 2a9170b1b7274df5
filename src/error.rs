use std::path::PathBuf;

/// Errors from building an agent out of configuration values.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("search depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error(
        "unknown agent kind '{0}' (expected 'greedy', 'minimax', 'alpha_beta', \
         'best_first_scan', or 'random')"
    )]
    UnknownKind(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),

    #[error("agent configuration error: {0}")]
    Agent(#[from] AgentError),
}
