use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl FactzError {
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        FactzError::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FactzError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, FactzError>;
