use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Fields of a campaign draft that are checked before sending.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CampaignField {
    Subject,
    Message,
}

impl Display for CampaignField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignField::Subject => write!(f, "subject"),
            CampaignField::Message => write!(f, "message"),
        }
    }
}

/// A field that failed validation, with a message meant for the user.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct FieldError {
    field: CampaignField,
    message: String,
}

impl FieldError {
    pub fn new(field: CampaignField, message: String) -> Self {
        Self { field, message }
    }
}
