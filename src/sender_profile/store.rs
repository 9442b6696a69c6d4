use crate::sender_profile::Result;
use crate::sender_profile::error::ProfileError::NotFound;
use dto::sender_profile::SenderProfile;
use log::debug;
use std::ops::Deref;

/// The sender profiles of the session, in creation order.
/// At most one profile is the default one at any time.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct ProfileStore {
    profiles: Vec<SenderProfile>,
}

impl Deref for ProfileStore {
    type Target = Vec<SenderProfile>;

    fn deref(&self) -> &Self::Target {
        &self.profiles
    }
}

impl ProfileStore {
    /// Append a profile. A default profile takes the flag away from every other profile.
    pub fn add(&mut self, profile: SenderProfile) -> &SenderProfile {
        if *profile.is_default() {
            self.clear_default();
        }
        debug!("Adding sender profile `{}`", profile.id());
        self.profiles.push(profile);
        &self.profiles[self.profiles.len() - 1]
    }

    /// Replace the profile having the same id.
    pub fn update(&mut self, profile: SenderProfile) -> Result<()> {
        let index = self.index_of(profile.id())?;
        if *profile.is_default() {
            self.clear_default();
        }
        debug!("Updating sender profile `{}`", profile.id());
        self.profiles[index] = profile;
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<SenderProfile> {
        let index = self.index_of(id)?;
        debug!("Deleting sender profile `{id}`");
        Ok(self.profiles.remove(index))
    }

    /// Make the given profile the only default one. Calling it again changes nothing.
    pub fn set_default(&mut self, id: &str) -> Result<()> {
        self.index_of(id)?;
        for profile in self.profiles.iter_mut() {
            let is_default = profile.id() == id;
            profile.set_default(is_default);
        }
        debug!("Sender profile `{id}` is now the default one");
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&SenderProfile> {
        self.profiles.iter().find(|profile| profile.id() == id)
    }

    pub fn find_default(&self) -> Option<&SenderProfile> {
        self.profiles.iter().find(|profile| *profile.is_default())
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.profiles
            .iter()
            .position(|profile| profile.id() == id)
            .ok_or_else(|| NotFound(id.to_owned()))
    }

    fn clear_default(&mut self) {
        self.profiles
            .iter_mut()
            .for_each(|profile| profile.set_default(false));
    }
}

impl From<Vec<SenderProfile>> for ProfileStore {
    /// Build a store from existing profiles.
    /// Should several of them be flagged as default, only the last one stays so.
    fn from(profiles: Vec<SenderProfile>) -> Self {
        profiles
            .into_iter()
            .fold(ProfileStore::default(), |mut store, profile| {
                store.add(profile);
                store
            })
    }
}
