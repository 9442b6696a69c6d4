use crate::sender_profile::error::ProfileError;
use uuid::Uuid;

pub mod error;
pub mod store;

type Result<T, E = ProfileError> = std::result::Result<T, E>;

/// Identifier given to a newly created profile.
pub fn generate_profile_id() -> String {
    Uuid::new_v4().to_string()
}
