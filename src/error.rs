use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse Error (line {line}): {message}")]
    Parse { line: usize, message: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Precondition Violated: {0}")]
    Precondition(String),
}

impl CoverForgeError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type CfResult<T> = Result<T, CoverForgeError>;
