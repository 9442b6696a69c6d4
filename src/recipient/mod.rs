use crate::recipient::error::ImportError;

pub mod directory;
pub mod error;
pub mod parser;
pub mod upload;

type Result<T, E = ImportError> = std::result::Result<T, E>;

/// Label given to recipients whose country is empty.
pub const UNSPECIFIED_COUNTRY: &str = "Unspecified";
