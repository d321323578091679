use crate::config::ProcessorConfig;
use crate::processor::ProcessReport;
use std::path::PathBuf;

pub mod config;
pub mod convert;
pub mod describe;
pub mod validate;

pub use describe::ProcessorDescription;

/// Locations the commands read configuration from.
#[derive(Debug, Clone)]
pub struct Ts2DatePaths {
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub reports: Vec<ProcessReport>,
    pub config: Option<ProcessorConfig>,
    pub description: Option<ProcessorDescription>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_reports(mut self, reports: Vec<ProcessReport>) -> Self {
        self.reports = reports;
        self
    }

    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_description(mut self, description: ProcessorDescription) -> Self {
        self.description = Some(description);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}
