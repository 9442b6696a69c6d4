use crate::recipient::Recipient;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The unsent composition state of a campaign.
/// An empty country selection targets every recipient.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDraft {
    subject: String,
    message: String,
    profile_id: Option<String>,
    selected_countries: BTreeSet<String>,
}

impl CampaignDraft {
    pub fn new(
        subject: String,
        message: String,
        profile_id: Option<String>,
        selected_countries: BTreeSet<String>,
    ) -> Self {
        Self {
            subject,
            message,
            profile_id,
            selected_countries,
        }
    }

    pub fn set_subject(&mut self, subject: String) {
        self.subject = subject;
    }

    pub fn set_message(&mut self, message: String) {
        self.message = message;
    }

    pub fn set_profile_id(&mut self, profile_id: Option<String>) {
        self.profile_id = profile_id;
    }

    pub fn set_selected_countries(&mut self, selected_countries: BTreeSet<String>) {
        self.selected_countries = selected_countries;
    }
}

/// What is handed off to the sending collaborator once a draft has been validated.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CampaignPayload {
    subject: String,
    message: String,
    profile_id: Option<String>,
    recipients: Vec<Recipient>,
}

impl CampaignPayload {
    pub fn new(
        subject: String,
        message: String,
        profile_id: Option<String>,
        recipients: Vec<Recipient>,
    ) -> Self {
        Self {
            subject,
            message,
            profile_id,
            recipients,
        }
    }
}

/// Acknowledgement returned by the sending collaborator.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SendReport {
    recipients_count: usize,
    submitted_at: DateTime<Utc>,
}

impl SendReport {
    pub fn new(recipients_count: usize, submitted_at: DateTime<Utc>) -> Self {
        Self {
            recipients_count,
            submitted_at,
        }
    }
}
