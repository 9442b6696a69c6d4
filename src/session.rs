use crate::campaign::composer::CampaignComposer;
use crate::campaign::preview::render_preview;
use crate::campaign::sender::CampaignSender;
use crate::dashboard::build_dashboard_stats;
use crate::error::Result;
use crate::recipient::directory::RecipientDirectory;
use crate::recipient::upload::{UploadConfig, import_upload};
use crate::sender_profile::error::ProfileError::NotFound;
use crate::sender_profile::generate_profile_id;
use crate::sender_profile::store::ProfileStore;
use dto::campaign::{CampaignDraft, SendReport};
use dto::dashboard_stats::DashboardStats;
use dto::email_preview::EmailPreview;
use dto::recipient::Recipient;
use dto::sender_profile::{ProfileForm, SenderProfile};
use log::debug;

/// Something that happened to the session, broadcast to its observers.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    RecipientsReplaced { count: usize },
    RecipientAdded { email: String },
    RecipientRemoved { email: String, count: usize },
    RecipientsMerged { count: usize },
    ProfileAdded(SenderProfile),
    ProfileUpdated(SenderProfile),
    ProfileDeleted { id: String },
    DefaultProfileChanged { id: String },
    DraftChanged,
    CampaignSubmitted(SendReport),
}

pub trait SessionObserver {
    fn notify(&self, event: &SessionEvent);
}

/// Owns the whole state of a user's session: recipients, sender profiles & campaign draft.
/// Every mutation goes through this type, which keeps them consistent with one another.
pub struct Session {
    directory: RecipientDirectory,
    profiles: ProfileStore,
    composer: CampaignComposer,
    upload_config: UploadConfig,
    sender: Box<dyn CampaignSender + Send>,
    observers: Vec<Box<dyn SessionObserver + Send>>,
}

impl Session {
    pub fn new(
        upload_config: UploadConfig,
        profiles: ProfileStore,
        sender: Box<dyn CampaignSender + Send>,
    ) -> Self {
        let composer = CampaignComposer::for_profiles(&profiles);
        Self {
            directory: RecipientDirectory::default(),
            profiles,
            composer,
            upload_config,
            sender,
            observers: vec![],
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver + Send>) {
        self.observers.push(observer);
    }

    fn emit(&self, event: SessionEvent) {
        debug!("{event:?}");
        self.observers
            .iter()
            .for_each(|observer| observer.notify(&event));
    }

    pub fn directory(&self) -> &RecipientDirectory {
        &self.directory
    }

    pub fn profiles(&self) -> &ProfileStore {
        &self.profiles
    }

    pub fn draft(&self) -> &CampaignDraft {
        self.composer.draft()
    }

    pub fn upload_config(&self) -> &UploadConfig {
        &self.upload_config
    }

    // region Recipients
    /// Replace the recipients with the content of an uploaded file.
    pub fn import_recipients(&mut self, content_type: &str, bytes: &[u8]) -> Result<usize> {
        let recipients = import_upload(&self.upload_config, content_type, bytes)?;
        let count = recipients.len();
        self.directory.replace_all(recipients);
        self.emit(SessionEvent::RecipientsReplaced { count });
        Ok(count)
    }

    /// Recipients matching `term`, restricted to the ones having a duplicate if requested.
    pub fn list_recipients(&self, term: &str, duplicates_only: bool) -> Vec<Recipient> {
        let matches = self.directory.search(term);
        if !duplicates_only {
            return matches.into_iter().cloned().collect();
        }

        let duplicates = self.directory.duplicates_only();
        matches
            .into_iter()
            .filter(|recipient| duplicates.contains(recipient))
            .cloned()
            .collect()
    }

    pub fn add_recipient(&mut self, recipient: Recipient) {
        let email = recipient.email().to_owned();
        self.directory.add(recipient);
        self.emit(SessionEvent::RecipientAdded { email });
    }

    pub fn remove_recipient(&mut self, email: &str) -> usize {
        let count = self.directory.remove(email);
        if count > 0 {
            self.emit(SessionEvent::RecipientRemoved {
                email: email.to_owned(),
                count,
            });
        }
        count
    }

    pub fn merge_recipients(&mut self, emails: &[String]) -> usize {
        let count = self.directory.merge(emails);
        if count > 0 {
            self.emit(SessionEvent::RecipientsMerged { count });
        }
        count
    }

    pub fn merge_all_duplicates(&mut self) -> usize {
        let count = self.directory.merge_all_duplicates();
        if count > 0 {
            self.emit(SessionEvent::RecipientsMerged { count });
        }
        count
    }

    pub fn dashboard(&self) -> DashboardStats {
        build_dashboard_stats(&self.directory)
    }
    // endregion

    // region Sender profiles
    pub fn add_profile(&mut self, form: ProfileForm) -> SenderProfile {
        let profile = self.profiles.add(form.into_profile(generate_profile_id())).clone();
        self.emit(SessionEvent::ProfileAdded(profile.clone()));
        profile
    }

    pub fn update_profile(&mut self, id: &str, form: ProfileForm) -> Result<SenderProfile> {
        let profile = form.into_profile(id.to_owned());
        self.profiles.update(profile.clone())?;
        self.emit(SessionEvent::ProfileUpdated(profile.clone()));
        Ok(profile)
    }

    /// Delete a profile. Should it be the one used by the draft, another one is picked.
    pub fn delete_profile(&mut self, id: &str) -> Result<SenderProfile> {
        let profile = self.profiles.delete(id)?;
        self.composer.resolve_profile(&self.profiles);
        self.emit(SessionEvent::ProfileDeleted { id: id.to_owned() });
        Ok(profile)
    }

    pub fn set_default_profile(&mut self, id: &str) -> Result<()> {
        self.profiles.set_default(id)?;
        self.emit(SessionEvent::DefaultProfileChanged { id: id.to_owned() });
        Ok(())
    }
    // endregion

    // region Campaign
    pub fn select_profile(&mut self, id: &str) -> Result<()> {
        let profile = self
            .profiles
            .find_by_id(id)
            .ok_or_else(|| NotFound(id.to_owned()))?;
        self.composer.select_profile(profile);
        self.emit(SessionEvent::DraftChanged);
        Ok(())
    }

    pub fn set_subject(&mut self, subject: String) {
        self.composer.set_subject(subject);
        self.emit(SessionEvent::DraftChanged);
    }

    pub fn set_message(&mut self, message: String) {
        self.composer.set_message(message);
        self.emit(SessionEvent::DraftChanged);
    }

    pub fn set_selected_countries(&mut self, countries: Vec<String>) {
        self.composer.set_selected_countries(countries);
        self.emit(SessionEvent::DraftChanged);
    }

    pub fn targets(&self) -> Vec<Recipient> {
        self.composer.resolve_targets(&self.directory)
    }

    /// Preview the draft for the first targeted recipient.
    pub fn preview(&self) -> EmailPreview {
        let profile = self
            .draft()
            .profile_id()
            .as_ref()
            .and_then(|id| self.profiles.find_by_id(id));
        render_preview(self.draft(), self.targets().first(), profile)
    }

    pub fn submit(&self) -> Result<SendReport> {
        let report = self
            .composer
            .submit(&self.directory, self.sender.as_ref())?;
        self.emit(SessionEvent::CampaignSubmitted(report.clone()));
        Ok(report)
    }
    // endregion
}

#[cfg(test)]
mod tests {
    use crate::campaign::error::CampaignError;
    use crate::campaign::sender::LoggingCampaignSender;
    use crate::campaign::sender::tests::RecordingSender;
    use crate::error::ApplicationError;
    use crate::recipient::error::ImportError;
    use crate::recipient::upload::UploadConfig;
    use crate::sender_profile::error::ProfileError::NotFound;
    use crate::sender_profile::store::ProfileStore;
    use crate::session::{Session, SessionEvent, SessionObserver};
    use dto::field_error::CampaignField;
    use dto::recipient::tests::{alice, bob, recipient};
    use dto::sender_profile::tests::{
        NEWSLETTER_MESSAGE, NEWSLETTER_SUBJECT, get_profile, get_profile_form,
    };
    use std::sync::{Arc, Mutex};

    const CSV: &[u8] = b"Alice,alice@x.com,France\nBob,bob@x.com,Togo\nCarol,ALICE@x.com,France";

    #[derive(Default, Clone)]
    struct RecordingObserver {
        events: Arc<Mutex<Vec<SessionEvent>>>,
    }

    impl RecordingObserver {
        fn events(&self) -> Vec<SessionEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl SessionObserver for RecordingObserver {
        fn notify(&self, event: &SessionEvent) {
            self.events.lock().unwrap().push(event.clone());
        }
    }

    fn get_session() -> Session {
        Session::new(
            UploadConfig::default(),
            ProfileStore::from(vec![
                get_profile("1", "Newsletter", true),
                get_profile("2", "Promotions", false),
            ]),
            Box::new(LoggingCampaignSender),
        )
    }

    fn get_observed_session() -> (Session, RecordingObserver) {
        let mut session = get_session();
        let observer = RecordingObserver::default();
        session.subscribe(Box::new(observer.clone()));
        (session, observer)
    }

    // region Recipients
    #[test]
    fn should_import_recipients() {
        let (mut session, observer) = get_observed_session();

        assert_eq!(Ok(3), session.import_recipients("text/csv", CSV));
        assert_eq!(3, session.directory().len());
        assert_eq!(
            vec![SessionEvent::RecipientsReplaced { count: 3 }],
            observer.events()
        );
    }

    #[test]
    fn should_keep_recipients_when_import_fails() {
        let (mut session, observer) = get_observed_session();
        session.import_recipients("text/csv", CSV).unwrap();

        let result = session.import_recipients("application/pdf", b"%PDF");

        assert_eq!(
            Err(ApplicationError::Import(ImportError::UnsupportedFileType(
                "application/pdf".to_owned()
            ))),
            result
        );
        assert_eq!(3, session.directory().len());
        assert_eq!(1, observer.events().len());
    }

    #[test]
    fn should_list_recipients() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();

        assert_eq!(3, session.list_recipients("", false).len());
        assert_eq!(vec![bob()], session.list_recipients("TOGO", false));
        assert_eq!(2, session.list_recipients("", true).len());
        assert!(session.list_recipients("bob", true).is_empty());
    }

    #[test]
    fn should_list_duplicated_recipients_matching_term() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();

        assert_eq!(
            vec![recipient("Carol", "ALICE@x.com", "France")],
            session.list_recipients("CAROL", true)
        );
        assert_eq!(
            vec![alice(), recipient("Carol", "ALICE@x.com", "France")],
            session.list_recipients("alice@", true)
        );
    }

    #[test]
    fn should_add_and_remove_recipient() {
        let (mut session, observer) = get_observed_session();
        session.add_recipient(alice());
        session.add_recipient(bob());

        assert_eq!(1, session.remove_recipient("ALICE@X.COM"));
        assert_eq!(0, session.remove_recipient("nobody@x.com"));
        assert_eq!(&vec![bob()], &**session.directory());
        assert_eq!(
            vec![
                SessionEvent::RecipientAdded {
                    email: "alice@x.com".to_owned()
                },
                SessionEvent::RecipientAdded {
                    email: "bob@x.com".to_owned()
                },
                SessionEvent::RecipientRemoved {
                    email: "ALICE@X.COM".to_owned(),
                    count: 1
                },
            ],
            observer.events()
        );
    }

    #[test]
    fn should_merge_recipients() {
        let (mut session, observer) = get_observed_session();
        session.import_recipients("text/csv", CSV).unwrap();
        let group = session.directory().find_duplicate_groups().remove(0);

        assert_eq!(1, session.merge_recipients(&group.emails()));
        assert_eq!(0, session.merge_recipients(&group.emails()));
        assert_eq!(&vec![alice(), bob()], &**session.directory());
        assert_eq!(
            Some(&SessionEvent::RecipientsMerged { count: 1 }),
            observer.events().last()
        );
    }

    #[test]
    fn should_merge_all_duplicates() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();
        session.add_recipient(recipient("Bob again", "bob@x.com", ""));

        assert_eq!(2, session.merge_all_duplicates());
        assert_eq!(&vec![alice(), bob()], &**session.directory());
    }

    #[test]
    fn should_build_dashboard() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();

        let dashboard = session.dashboard();
        assert_eq!(3, *dashboard.total_recipients());
        assert_eq!(1, *dashboard.duplicate_groups_count());
    }
    // endregion

    // region Sender profiles
    #[test]
    fn should_start_with_default_profile_selected() {
        let session = get_session();

        assert_eq!(&Some("1".to_owned()), session.draft().profile_id());
        assert_eq!(NEWSLETTER_SUBJECT, session.draft().subject());
        assert_eq!(NEWSLETTER_MESSAGE, session.draft().message());
    }

    #[test]
    fn should_add_profile_with_generated_id() {
        let (mut session, observer) = get_observed_session();

        let first = session.add_profile(get_profile_form("Support", false));
        let second = session.add_profile(get_profile_form("Support", false));

        assert!(!first.id().is_empty());
        assert_ne!(first.id(), second.id());
        assert_eq!(4, session.profiles().len());
        assert_eq!(
            vec![
                SessionEvent::ProfileAdded(first),
                SessionEvent::ProfileAdded(second)
            ],
            observer.events()
        );
    }

    #[test]
    fn should_update_profile() {
        let mut session = get_session();

        let updated = session
            .update_profile("2", get_profile_form("Offers", false))
            .unwrap();

        assert_eq!("2", updated.id());
        assert_eq!(Some(&updated), session.profiles().find_by_id("2"));
    }

    #[test]
    fn should_not_update_unknown_profile() {
        let mut session = get_session();

        assert_eq!(
            Err(ApplicationError::Profile(NotFound("42".to_owned()))),
            session.update_profile("42", get_profile_form("Offers", false))
        );
    }

    #[test]
    fn should_fall_back_when_current_profile_is_deleted() {
        let (mut session, observer) = get_observed_session();

        session.delete_profile("1").unwrap();
        assert_eq!(&Some("2".to_owned()), session.draft().profile_id());
        assert!(session.profiles().find_default().is_none());

        session.delete_profile("2").unwrap();
        assert_eq!(&None, session.draft().profile_id());
        assert_eq!(
            vec![
                SessionEvent::ProfileDeleted { id: "1".to_owned() },
                SessionEvent::ProfileDeleted { id: "2".to_owned() },
            ],
            observer.events()
        );
    }

    #[test]
    fn should_set_default_profile() {
        let mut session = get_session();
        session.set_default_profile("2").unwrap();

        assert_eq!(
            Some("2"),
            session.profiles().find_default().map(|profile| profile.id().as_str())
        );
        assert_eq!(
            Err(ApplicationError::Profile(NotFound("42".to_owned()))),
            session.set_default_profile("42")
        );
    }
    // endregion

    // region Campaign
    #[test]
    fn should_select_profile() {
        let mut session = get_session();
        session.set_subject("Something else".to_owned());

        session.select_profile("1").unwrap();
        assert_eq!(NEWSLETTER_SUBJECT, session.draft().subject());
        assert_eq!(
            Err(ApplicationError::Profile(NotFound("42".to_owned()))),
            session.select_profile("42")
        );
    }

    #[test]
    fn should_resolve_targets() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();

        assert_eq!(3, session.targets().len());
        session.set_selected_countries(vec!["Togo".to_owned()]);
        assert_eq!(vec![bob()], session.targets());
    }

    #[test]
    fn should_preview_for_first_target() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();
        session.set_selected_countries(vec!["Togo".to_owned()]);

        let preview = session.preview();
        assert_eq!("Bob <bob@x.com>", preview.to());
        assert_eq!(
            &Some("Newsletter <newsletter@sender.com>".to_owned()),
            preview.sender()
        );
    }

    #[test]
    fn should_submit_campaign() {
        let sender = RecordingSender::default();
        let mut session = Session::new(
            UploadConfig::default(),
            ProfileStore::default(),
            Box::new(sender.clone()),
        );
        let observer = RecordingObserver::default();
        session.subscribe(Box::new(observer.clone()));
        session.import_recipients("text/csv", CSV).unwrap();
        session.set_subject("Hello".to_owned());
        session.set_message("Hello everyone!".to_owned());

        let report = session.submit().unwrap();

        assert_eq!(3, *report.recipients_count());
        assert_eq!(1, sender.payloads().len());
        assert_eq!(&None, sender.payloads()[0].profile_id());
        assert_eq!(
            Some(&SessionEvent::CampaignSubmitted(report)),
            observer.events().last()
        );
    }

    #[test]
    fn should_not_submit_invalid_campaign() {
        let mut session = get_session();
        session.import_recipients("text/csv", CSV).unwrap();
        session.set_subject("Hello".to_owned());
        session.set_message("short".to_owned());

        match session.submit() {
            Err(ApplicationError::Campaign(CampaignError::Validation(error))) => {
                assert_eq!(vec![CampaignField::Message], error.fields())
            }
            result => panic!("Unexpected result: {result:?}"),
        }
    }
    // endregion
}
