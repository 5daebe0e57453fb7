use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("failure opening '{0}': {1}")]
    FileOpenError(String, std::io::Error),
    #[error("failure creating '{0}': {1}")]
    FileCreateError(String, std::io::Error),
    #[error("failure reading header of '{filename}': {source}")]
    HeaderReadError {
        filename: String,
        source: csv::Error,
    },
    #[error("table '{filename}' is missing required column '{column}'")]
    MissingColumn { filename: String, column: String },
    #[error("failure decoding row {row} of '{filename}': {source}")]
    MalformedRow {
        filename: String,
        row: u64,
        source: csv::Error,
    },
    #[error("failure writing to file {0}: {1}")]
    CsvWriteError(String, csv::Error),
    #[error("failure flushing file {0}: {1}")]
    FlushError(String, std::io::Error),
}
