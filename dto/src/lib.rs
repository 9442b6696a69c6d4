pub mod campaign;
pub mod country_stat;
pub mod dashboard_stats;
pub mod duplicate_group;
pub mod email_preview;
pub mod field_error;
pub mod recipient;
pub mod sender_profile;
