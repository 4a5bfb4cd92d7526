use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Pause between two passes unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Topic Name: <id>`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    project_id: String,
    interval: Duration,
    format: OutputFormat,
}

impl ListerConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            interval: DEFAULT_INTERVAL,
            format: OutputFormat::default(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.project_id.is_empty() {
            return Err(ConfigError::EmptyProject);
        }
        if self
            .project_id
            .chars()
            .any(|c| c == '/' || c.is_whitespace())
        {
            return Err(ConfigError::InvalidProject(self.project_id.clone()));
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(())
    }
}
