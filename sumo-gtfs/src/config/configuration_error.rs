use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failure reading {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure decoding {0}: {1}")]
    DecodeError(String, String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
}
