use thiserror::Error;

use crate::view::ViewId;

/// Why a deferred view's content could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("{view} content is malformed: {reason}")]
    Malformed { view: ViewId, reason: String },
    #[error("{view} content is invalid: {reason}")]
    Invalid { view: ViewId, reason: String },
    #[error("{0} loader went away before resolving")]
    Abandoned(ViewId),
}

/// Why the Home sketch effect could not be bound to its path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("sketch target not found: {0}")]
    TargetMissing(#[from] PathError),
    #[error("animation is unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path data does not parse: {0}")]
    Syntax(String),
    #[error("path has no drawable length")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
