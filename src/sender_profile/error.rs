use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("No sender profile with id `{0}`.")]
    NotFound(String),
}
