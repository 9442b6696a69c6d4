use thiserror::Error;

/// Reasons an uploaded recipients file is refused before being parsed.
#[derive(Debug, Error, PartialEq)]
pub enum ImportError {
    #[error("Unsupported file type `{0}`: expected a CSV file.")]
    UnsupportedFileType(String),
    #[error("File is too large ({size} bytes): the limit is {max_size} bytes.")]
    FileTooLarge { size: u64, max_size: u64 },
}
