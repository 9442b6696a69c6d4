use crate::campaign::error::CampaignError;
use crate::recipient::error::ImportError;
use crate::sender_profile::error::ProfileError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("The recipients file couldn't be imported.")]
    Import(#[from] ImportError),
    #[error("Error while managing sender profiles.")]
    Profile(#[from] ProfileError),
    #[error("The campaign couldn't be sent.")]
    Campaign(#[from] CampaignError),
}
