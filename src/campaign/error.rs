use derive_getters::Getters;
use dto::field_error::{CampaignField, FieldError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CampaignError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("No recipient matches the selected countries.")]
    NoRecipients,
    #[error("The campaign couldn't be handed off for sending.")]
    Send(#[from] SendError),
}

/// Every field of the draft that doesn't meet its constraints.
#[derive(Debug, Error, PartialEq, Getters)]
#[error("The campaign draft is invalid ({} field(s) to fix).", .errors.len())]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn fields(&self) -> Vec<CampaignField> {
        self.errors.iter().map(|error| *error.field()).collect()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SendError {
    #[error("The sending service refused the campaign: {0}")]
    Refused(String),
}
