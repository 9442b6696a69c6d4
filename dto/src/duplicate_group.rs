use crate::recipient::Recipient;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Recipients sharing the same email address, regardless of case.
/// `email` is the lower-cased address, `recipients` are kept in list order.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct DuplicateGroup {
    email: String,
    recipients: Vec<Recipient>,
}

impl DuplicateGroup {
    pub fn new(email: String, recipients: Vec<Recipient>) -> Self {
        Self { email, recipients }
    }

    /// Emails of every member of the group, as they appear in the list.
    pub fn emails(&self) -> Vec<String> {
        self.recipients
            .iter()
            .map(|recipient| recipient.email().to_owned())
            .collect()
    }
}
