use crate::model::{CloseApproach, NearEarthObject};
use std::path::PathBuf;
use std::sync::Arc;

pub mod export;
pub mod inspect;
pub mod query;

/// How `inspect` identifies a single NEO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeoSelector {
    Designation(String),
    Name(String),
}

#[derive(Debug, Clone)]
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
    pub neos: Vec<Arc<NearEarthObject>>,
    pub approaches: Vec<CloseApproach>,
    pub written_to: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_neos(mut self, neos: Vec<Arc<NearEarthObject>>) -> Self {
        self.neos = neos;
        self
    }

    pub fn with_approaches(mut self, approaches: Vec<CloseApproach>) -> Self {
        self.approaches = approaches;
        self
    }

    pub fn with_written_to(mut self, path: PathBuf) -> Self {
        self.written_to = Some(path);
        self
    }
}
