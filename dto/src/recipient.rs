use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A contact a campaign can be sent to.
/// The email address is the business key, compared without regard to case.
/// An empty country means the country is unspecified.
#[derive(Debug, Getters, Serialize, Deserialize, Eq, PartialEq, Hash, Clone, Default)]
pub struct Recipient {
    name: String,
    email: String,
    #[serde(default)]
    country: String,
}

impl Recipient {
    pub fn new(name: String, email: String, country: String) -> Self {
        Self {
            name,
            email,
            country,
        }
    }

    /// Key used to compare recipients: the lower-cased email address.
    pub fn email_key(&self) -> String {
        self.email.to_lowercase()
    }

    pub fn has_country(&self) -> bool {
        !self.country.is_empty()
    }

    /// Case-insensitive substring match against name, email and country.
    /// `lowercase_term` is expected to be lower-cased already.
    pub fn matches(&self, lowercase_term: &str) -> bool {
        self.name.to_lowercase().contains(lowercase_term)
            || self.email.to_lowercase().contains(lowercase_term)
            || self.country.to_lowercase().contains(lowercase_term)
    }

    /// `Name <email>`, or the bare email address when there is no name.
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            self.email.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    pub const ALICE_NAME: &str = "Alice";
    pub const ALICE_EMAIL: &str = "alice@x.com";
    pub const BOB_NAME: &str = "Bob";
    pub const BOB_EMAIL: &str = "bob@x.com";
    pub const FRANCE: &str = "France";
    pub const TOGO: &str = "Togo";

    pub fn recipient(name: &str, email: &str, country: &str) -> Recipient {
        Recipient::new(name.to_owned(), email.to_owned(), country.to_owned())
    }

    pub fn alice() -> Recipient {
        recipient(ALICE_NAME, ALICE_EMAIL, FRANCE)
    }

    pub fn bob() -> Recipient {
        recipient(BOB_NAME, BOB_EMAIL, TOGO)
    }

    #[test]
    fn should_build_email_key() {
        let recipient = recipient("Alice", "Alice@X.com", "France");
        assert_eq!("alice@x.com", recipient.email_key());
    }

    #[parameterized(
        term = {"", "ali", "x.com", "fra", "bob"},
        expected_result = {true, true, true, true, false}
    )]
    fn should_match_term(term: &str, expected_result: bool) {
        assert_eq!(expected_result, alice().matches(term));
    }

    #[parameterized(
        name = {"Alice", ""},
        expected_result = {"Alice <alice@x.com>", "alice@x.com"}
    )]
    fn should_display_recipient(name: &str, expected_result: &str) {
        assert_eq!(expected_result, recipient(name, ALICE_EMAIL, FRANCE).display());
    }

    #[test]
    fn should_deserialize_without_country() {
        let json = r#"{"name":"Alice","email":"alice@x.com"}"#;
        let result: Recipient = serde_json::from_str(json).unwrap();

        assert_eq!(recipient(ALICE_NAME, ALICE_EMAIL, ""), result);
        assert!(!result.has_country());
    }
}
