use thiserror::Error;

#[derive(Error, Debug)]
pub enum HcError {
    #[error("Unknown method: {0}")]
    UnknownMethod(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Document nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
    #[error("Stage {stage} failed: {message}")]
    Stage { stage: String, message: String },
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HcError {
    pub fn stage(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stage { stage: stage.into(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, HcError>;
