use thiserror::Error;

#[derive(Debug, Error)]
pub enum SkuscanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("Spreadsheet contains no worksheets")]
    NoWorksheet,

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },
}
