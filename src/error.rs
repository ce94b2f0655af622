//! Internal error taxonomy.
//!
//! None of these reach the host runtime: the binary logs them and fails open.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GuardError {
    #[error("failed to read hook input from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("hook input is not valid JSON: {0}")]
    InvalidInput(#[source] serde_json::Error),

    #[error("failed to write hook output to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("failed to serialize hook output: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to read config: {0}")]
    ConfigRead(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid denylist pattern: {0}")]
    Pattern(#[from] regex::Error),
}
