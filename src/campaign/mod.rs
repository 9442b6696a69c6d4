use crate::campaign::error::CampaignError;

pub mod composer;
pub mod error;
pub mod preview;
pub mod sender;

type Result<T, E = CampaignError> = std::result::Result<T, E>;
