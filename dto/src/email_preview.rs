use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A piece of the previewed message body.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MessageSegment {
    Text { text: String },
    Link { text: String, href: String },
}

/// The email as a recipient would see it.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct EmailPreview {
    to: String,
    country: String,
    subject: String,
    segments: Vec<MessageSegment>,
    sender: Option<String>,
    signature: Option<Vec<MessageSegment>>,
}

impl EmailPreview {
    pub fn new(
        to: String,
        country: String,
        subject: String,
        segments: Vec<MessageSegment>,
        sender: Option<String>,
        signature: Option<Vec<MessageSegment>>,
    ) -> Self {
        Self {
            to,
            country,
            subject,
            segments,
            sender,
            signature,
        }
    }
}
