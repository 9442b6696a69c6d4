use crate::recipient::UNSPECIFIED_COUNTRY;
use dto::country_stat::CountryStat;
use dto::duplicate_group::DuplicateGroup;
use dto::recipient::Recipient;
use log::debug;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::ops::Deref;

/// The recipients of the session, in import order.
/// Duplicates are allowed: they are surfaced through [RecipientDirectory::find_duplicate_groups].
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct RecipientDirectory {
    recipients: Vec<Recipient>,
}

impl Deref for RecipientDirectory {
    type Target = Vec<Recipient>;

    fn deref(&self) -> &Self::Target {
        &self.recipients
    }
}

impl From<Vec<Recipient>> for RecipientDirectory {
    fn from(recipients: Vec<Recipient>) -> Self {
        Self { recipients }
    }
}

impl RecipientDirectory {
    pub fn replace_all(&mut self, recipients: Vec<Recipient>) {
        debug!(
            "Replacing {} recipient(s) with {} recipient(s)",
            self.recipients.len(),
            recipients.len()
        );
        self.recipients = recipients;
    }

    pub fn add(&mut self, recipient: Recipient) {
        self.recipients.push(recipient);
    }

    /// Remove every recipient whose email matches, regardless of case.
    /// Return how many recipients have been removed.
    pub fn remove(&mut self, email: &str) -> usize {
        let key = email.to_lowercase();
        let count_before = self.recipients.len();
        self.recipients
            .retain(|recipient| recipient.email_key() != key);
        count_before - self.recipients.len()
    }

    /// Group recipients by lower-cased email, keeping groups having at least 2 members.
    /// Groups are ordered by first occurrence, members by list order.
    pub fn find_duplicate_groups(&self) -> Vec<DuplicateGroup> {
        let mut groups: Vec<(String, Vec<Recipient>)> = vec![];
        let mut indexes: HashMap<String, usize> = HashMap::new();

        for recipient in &self.recipients {
            let key = recipient.email_key();
            match indexes.get(&key) {
                Some(&index) => groups[index].1.push(recipient.clone()),
                None => {
                    indexes.insert(key.clone(), groups.len());
                    groups.push((key, vec![recipient.clone()]));
                }
            }
        }

        groups
            .into_iter()
            .filter(|(_, members)| members.len() > 1)
            .map(|(email, members)| DuplicateGroup::new(email, members))
            .collect()
    }

    /// Keep the first recipient whose email matches `emails[0]`
    /// and remove every other recipient whose email is part of `emails`.
    /// Emails are compared regardless of case.
    ///
    /// /!\ Passing the emails of several groups at once keeps a single recipient overall.
    /// To merge groups separately, use [RecipientDirectory::merge_all_duplicates].
    pub fn merge(&mut self, emails: &[String]) -> usize {
        let Some(first_email) = emails.first() else {
            return 0;
        };
        let first_key = first_email.to_lowercase();
        let keys: HashSet<String> = emails.iter().map(|email| email.to_lowercase()).collect();
        let kept_index = self
            .recipients
            .iter()
            .position(|recipient| recipient.email_key() == first_key);

        let count_before = self.recipients.len();
        let mut index = 0;
        self.recipients.retain(|recipient| {
            let keep = Some(index) == kept_index || !keys.contains(&recipient.email_key());
            index += 1;
            keep
        });

        let removed = count_before - self.recipients.len();
        debug!("{removed} recipient(s) merged into `{first_email}`");
        removed
    }

    /// Merge each duplicate group on its own, keeping its first occurrence.
    pub fn merge_all_duplicates(&mut self) -> usize {
        self.find_duplicate_groups()
            .into_iter()
            .map(|group| self.merge(&[group.email().to_owned()]))
            .sum()
    }

    /// Count & share of recipients per country, the most represented country first.
    /// Ties keep the order in which countries are first encountered.
    pub fn country_breakdown(&self) -> Vec<CountryStat> {
        let total = self.recipients.len();
        self.tally_countries()
            .into_iter()
            .map(|(country, count)| {
                let label = if country.is_empty() {
                    UNSPECIFIED_COUNTRY
                } else {
                    country
                };
                CountryStat::new(label.to_owned(), count, percentage(count, total))
            })
            .collect()
    }

    /// Specified countries, in the same order as [RecipientDirectory::country_breakdown].
    pub fn available_countries(&self) -> Vec<String> {
        self.tally_countries()
            .into_iter()
            .filter(|(country, _)| !country.is_empty())
            .map(|(country, _)| country.to_owned())
            .collect()
    }

    pub fn distinct_countries(&self) -> usize {
        self.recipients
            .iter()
            .filter(|recipient| recipient.has_country())
            .map(|recipient| recipient.country())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Case-insensitive search through names, emails & countries.
    /// An empty term matches every recipient.
    pub fn search(&self, term: &str) -> Vec<&Recipient> {
        let term = term.to_lowercase();
        self.recipients
            .iter()
            .filter(|recipient| recipient.matches(&term))
            .collect()
    }

    /// Recipients belonging to a duplicate group, in list order.
    pub fn duplicates_only(&self) -> Vec<&Recipient> {
        let duplicate_keys: HashSet<String> = self
            .find_duplicate_groups()
            .into_iter()
            .map(|group| group.email().to_owned())
            .collect();
        self.recipients
            .iter()
            .filter(|recipient| duplicate_keys.contains(&recipient.email_key()))
            .collect()
    }

    /// Recipients whose country is one of `countries`, compared exactly.
    /// An empty selection matches every recipient.
    pub fn filter_by_countries(&self, countries: &BTreeSet<String>) -> Vec<&Recipient> {
        self.recipients
            .iter()
            .filter(|recipient| countries.is_empty() || countries.contains(recipient.country()))
            .collect()
    }

    fn tally_countries(&self) -> Vec<(&str, usize)> {
        let mut tally: Vec<(&str, usize)> = vec![];
        let mut indexes: HashMap<&str, usize> = HashMap::new();

        for recipient in &self.recipients {
            let country = recipient.country().as_str();
            match indexes.get(country) {
                Some(&index) => tally[index].1 += 1,
                None => {
                    indexes.insert(country, tally.len());
                    tally.push((country, 1));
                }
            }
        }

        // Stable sort: ties stay in order of first occurrence.
        tally.sort_by(|(_, left), (_, right)| right.cmp(left));
        tally
    }
}

fn percentage(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round() as u8
}
