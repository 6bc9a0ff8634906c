use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Activity file(s) missing required column(s): {}", .columns.join(", "))]
    MissingActivityColumns { columns: Vec<String> },

    #[error("Master file missing required column(s): {}", .columns.join(", "))]
    MissingMasterColumns { columns: Vec<String> },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MergeError>;
