use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A reusable sending identity.
/// Its default subject & message are templates copied into a campaign draft when selected.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SenderProfile {
    id: String,
    name: String,
    email: String,
    default_subject: String,
    default_message: String,
    signature: String,
    is_default: bool,
}

impl SenderProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: String,
        name: String,
        email: String,
        default_subject: String,
        default_message: String,
        signature: String,
        is_default: bool,
    ) -> Self {
        Self {
            id,
            name,
            email,
            default_subject,
            default_message,
            signature,
            is_default,
        }
    }

    pub fn set_default(&mut self, is_default: bool) {
        self.is_default = is_default;
    }

    /// `Name <email>`, or the bare email address when the profile has no name.
    pub fn sender_line(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

/// The editable part of a [SenderProfile], as submitted by a user.
/// The identifier is generated when the profile is created.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    name: String,
    email: String,
    default_subject: String,
    default_message: String,
    signature: String,
    is_default: bool,
}

impl ProfileForm {
    pub fn new(
        name: String,
        email: String,
        default_subject: String,
        default_message: String,
        signature: String,
        is_default: bool,
    ) -> Self {
        Self {
            name,
            email,
            default_subject,
            default_message,
            signature,
            is_default,
        }
    }

    pub fn into_profile(self, id: String) -> SenderProfile {
        SenderProfile::new(
            id,
            self.name,
            self.email,
            self.default_subject,
            self.default_message,
            self.signature,
            self.is_default,
        )
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const NEWSLETTER_SUBJECT: &str = "Monthly newsletter";
    pub const NEWSLETTER_MESSAGE: &str = "Hello everyone, here is our monthly newsletter.";
    pub const PROMOTION_SUBJECT: &str = "Spring promotion";
    pub const PROMOTION_MESSAGE: &str = "Discover our spring offers on www.example.com";

    pub fn get_profile_form(name: &str, is_default: bool) -> ProfileForm {
        ProfileForm::new(
            name.to_owned(),
            format!("{}@sender.com", name.to_lowercase()),
            NEWSLETTER_SUBJECT.to_owned(),
            NEWSLETTER_MESSAGE.to_owned(),
            format!("-- \n{name}"),
            is_default,
        )
    }

    pub fn get_profile(id: &str, name: &str, is_default: bool) -> SenderProfile {
        get_profile_form(name, is_default).into_profile(id.to_owned())
    }

    pub fn get_promotion_profile(id: &str) -> SenderProfile {
        SenderProfile::new(
            id.to_owned(),
            "Promotions".to_owned(),
            "promotions@sender.com".to_owned(),
            PROMOTION_SUBJECT.to_owned(),
            PROMOTION_MESSAGE.to_owned(),
            String::new(),
            false,
        )
    }

    #[test]
    fn should_build_profile_from_form() {
        let profile = get_profile_form("Newsletter", true).into_profile("42".to_owned());

        assert_eq!("42", profile.id());
        assert_eq!("Newsletter", profile.name());
        assert_eq!("newsletter@sender.com", profile.email());
        assert_eq!(NEWSLETTER_SUBJECT, profile.default_subject());
        assert_eq!(NEWSLETTER_MESSAGE, profile.default_message());
        assert!(profile.is_default());
    }

    #[test]
    fn should_serialize_with_camel_case() {
        let profile = get_profile("42", "Newsletter", false);
        let json = serde_json::to_value(&profile).unwrap();

        assert_eq!(NEWSLETTER_SUBJECT, json["defaultSubject"]);
        assert_eq!(false, json["isDefault"]);
    }

    #[test]
    fn should_deserialize_partial_form() {
        let form: ProfileForm = serde_json::from_str(r#"{"name":"Newsletter"}"#).unwrap();

        assert_eq!("Newsletter", form.name());
        assert_eq!("", form.email());
        assert!(!form.is_default());
    }

    #[test]
    fn should_build_sender_line() {
        let profile = get_profile("42", "Newsletter", false);
        assert_eq!("Newsletter <newsletter@sender.com>", profile.sender_line());
    }
}
