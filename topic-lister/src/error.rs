use std::io;

/// Error type reported by backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
#[error("topic resource name '{name}' has an empty identifier")]
pub struct InvalidTopicId {
    pub name: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("project id is empty")]
    EmptyProject,

    #[error("invalid project id '{0}'")]
    InvalidProject(String),

    #[error("poll interval must be greater than zero")]
    ZeroInterval,
}

/// Failure of a single listing pass.
#[derive(Debug, thiserror::Error)]
pub enum ListerError {
    /// The session could not be opened. Nothing was written.
    #[error("project {project}: {source}")]
    Connect {
        project: String,
        #[source]
        source: BoxError,
    },

    /// Fetching a page failed after `listed` topics were written.
    #[error("project {project}, after {listed} topics: {source}")]
    Enumerate {
        project: String,
        listed: usize,
        #[source]
        source: BoxError,
    },

    #[error("{0}")]
    Output(#[from] io::Error),
}

impl ListerError {
    /// Static prefix for the one-line diagnostic shown to operators.
    pub fn context(&self) -> &'static str {
        match self {
            ListerError::Connect { .. } => "failed to open pub/sub session",
            ListerError::Enumerate { .. } => "failed to enumerate topics",
            ListerError::Output(_) => "failed to write topic listing",
        }
    }
}
