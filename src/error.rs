use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvogaitError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Snapshot member count mismatch: exported {expected}, imported {actual}")]
    SnapshotMismatch { expected: usize, actual: usize },

    #[error("Evaluator error: {0}")]
    Evaluator(String),

    #[error("Evaluation did not complete after {polls} polls")]
    EvaluationTimeout { polls: u64 },

    #[error("Evaluation cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvogaitError>;
