use crate::config::FactzConfig;
use crate::model::{CurrentFact, Fact};

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod load;
pub mod random;
pub mod search;

pub use add::NewFactStatus;

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
    /// New value for the viewer's current fact, if the command picked one.
    pub current: Option<CurrentFact>,
    pub status: Option<NewFactStatus>,
    pub listed_facts: Vec<Fact>,
    pub config: Option<FactzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_current(mut self, current: CurrentFact) -> Self {
        self.current = Some(current);
        self
    }

    pub fn with_status(mut self, status: NewFactStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_listed_facts(mut self, facts: Vec<Fact>) -> Self {
        self.listed_facts = facts;
        self
    }

    pub fn with_config(mut self, config: FactzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
