use crate::campaign::Result;
use crate::campaign::error::CampaignError::NoRecipients;
use crate::campaign::error::ValidationError;
use crate::campaign::sender::CampaignSender;
use crate::recipient::directory::RecipientDirectory;
use crate::sender_profile::store::ProfileStore;
use dto::campaign::{CampaignDraft, CampaignPayload, SendReport};
use dto::field_error::{CampaignField, FieldError};
use dto::recipient::Recipient;
use dto::sender_profile::SenderProfile;
use log::{debug, info};

pub const MIN_SUBJECT_LENGTH: usize = 3;
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Holds the campaign being written and turns it into a payload once it is valid.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CampaignComposer {
    draft: CampaignDraft,
}

impl CampaignComposer {
    /// A composer starting from the default profile, or the first one if none is the default.
    pub fn for_profiles(profiles: &ProfileStore) -> Self {
        let mut composer = Self::default();
        if let Some(profile) = profiles.find_default().or(profiles.first()) {
            composer.select_profile(profile);
        }
        composer
    }

    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    /// Use the profile for the campaign and copy its default subject & message into the draft.
    /// Later edits of the draft don't affect the profile.
    pub fn select_profile(&mut self, profile: &SenderProfile) {
        debug!("Composing with sender profile `{}`", profile.id());
        self.draft.set_profile_id(Some(profile.id().to_owned()));
        self.draft.set_subject(profile.default_subject().to_owned());
        self.draft.set_message(profile.default_message().to_owned());
    }

    /// Make sure the selected profile still exists.
    /// Otherwise, fall back to the first profile, or to no profile at all.
    /// The subject & message are left untouched.
    pub fn resolve_profile(&mut self, profiles: &ProfileStore) {
        let still_exists = self
            .draft
            .profile_id()
            .as_ref()
            .is_some_and(|id| profiles.find_by_id(id).is_some());
        if !still_exists {
            let fallback = profiles.first().map(|profile| profile.id().to_owned());
            debug!("Falling back to sender profile {fallback:?}");
            self.draft.set_profile_id(fallback);
        }
    }

    pub fn set_subject(&mut self, subject: String) {
        self.draft.set_subject(subject);
    }

    pub fn set_message(&mut self, message: String) {
        self.draft.set_message(message);
    }

    pub fn set_selected_countries<I>(&mut self, countries: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.draft
            .set_selected_countries(countries.into_iter().collect());
    }

    /// Recipients who would receive the campaign if it were sent now.
    pub fn resolve_targets(&self, directory: &RecipientDirectory) -> Vec<Recipient> {
        directory
            .filter_by_countries(self.draft.selected_countries())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = vec![];
        if self.draft.subject().chars().count() < MIN_SUBJECT_LENGTH {
            errors.push(FieldError::new(
                CampaignField::Subject,
                format!("Subject must be at least {MIN_SUBJECT_LENGTH} characters"),
            ));
        }
        if self.draft.message().chars().count() < MIN_MESSAGE_LENGTH {
            errors.push(FieldError::new(
                CampaignField::Message,
                format!("Message must be at least {MIN_MESSAGE_LENGTH} characters"),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }

    /// Validate the draft, then hand it off along with its recipients.
    pub fn submit(
        &self,
        directory: &RecipientDirectory,
        sender: &dyn CampaignSender,
    ) -> Result<SendReport> {
        self.validate()?;

        let recipients = self.resolve_targets(directory);
        if recipients.is_empty() {
            return Err(NoRecipients);
        }

        let payload = CampaignPayload::new(
            self.draft.subject().to_owned(),
            self.draft.message().to_owned(),
            self.draft.profile_id().clone(),
            recipients,
        );
        let report = sender.send(payload)?;
        info!(
            "Campaign submitted to {} recipient(s)",
            report.recipients_count()
        );
        Ok(report)
    }
}
