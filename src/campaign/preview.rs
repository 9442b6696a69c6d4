use crate::recipient::UNSPECIFIED_COUNTRY;
use crate::tools::log_message_and_return;
use dto::campaign::CampaignDraft;
use dto::email_preview::{EmailPreview, MessageSegment};
use dto::recipient::Recipient;
use dto::sender_profile::SenderProfile;
use regex::Regex;

const URL_PATTERN: &str = r"(https?://[^\s]+)|(www\.[^\s]+)";
const NO_SUBJECT: &str = "(No subject)";

/// Recipient shown when there is nobody to preview the email for.
pub fn placeholder_recipient() -> Recipient {
    Recipient::new(
        "Example".to_owned(),
        "example@email.com".to_owned(),
        "France".to_owned(),
    )
}

/// Render the draft as `recipient` would receive it, signed by `profile`.
/// Links are detected in the signature as well as in the message.
pub fn render_preview(
    draft: &CampaignDraft,
    recipient: Option<&Recipient>,
    profile: Option<&SenderProfile>,
) -> EmailPreview {
    let recipient = recipient.cloned().unwrap_or_else(placeholder_recipient);
    let country = if recipient.has_country() {
        recipient.country().to_owned()
    } else {
        UNSPECIFIED_COUNTRY.to_owned()
    };
    let subject = if draft.subject().is_empty() {
        NO_SUBJECT.to_owned()
    } else {
        draft.subject().to_owned()
    };
    let signature = profile
        .map(|profile| profile.signature())
        .filter(|signature| !signature.is_empty())
        .map(|signature| split_links(signature));

    EmailPreview::new(
        recipient.display(),
        country,
        subject,
        split_links(draft.message()),
        profile.map(SenderProfile::sender_line),
        signature,
    )
}

/// Split a text into plain text & links.
/// Links start with `http://`, `https://` or `www.` and run up to the next whitespace.
pub fn split_links(text: &str) -> Vec<MessageSegment> {
    if text.is_empty() {
        return vec![];
    }
    let whole_text = vec![MessageSegment::Text {
        text: text.to_owned(),
    }];
    let Ok(regex) = Regex::new(URL_PATTERN)
        .map_err(log_message_and_return("Can't build link regex", ()))
    else {
        return whole_text;
    };

    let mut segments = vec![];
    let mut last_end = 0;
    for link in regex.find_iter(text) {
        if link.start() > last_end {
            segments.push(MessageSegment::Text {
                text: text[last_end..link.start()].to_owned(),
            });
        }
        segments.push(to_link(link.as_str()));
        last_end = link.end();
    }
    if last_end < text.len() {
        segments.push(MessageSegment::Text {
            text: text[last_end..].to_owned(),
        });
    }

    segments
}

fn to_link(text: &str) -> MessageSegment {
    let href = if text.starts_with("www.") {
        format!("https://{text}")
    } else {
        text.to_owned()
    };
    MessageSegment::Link {
        text: text.to_owned(),
        href,
    }
}
