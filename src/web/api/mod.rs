use crate::session::Session;
use crate::tools::log_message_and_return;
use crate::web::error::ApiError;
use std::sync::{Mutex, MutexGuard};

pub mod campaign_controller;
pub mod dashboard_controller;
pub mod profiles_controller;
pub mod recipients_controller;
pub mod server;

fn lock_session(session: &Mutex<Session>) -> Result<MutexGuard<'_, Session>, ApiError> {
    session.lock().map_err(log_message_and_return(
        "Couldn't acquire session lock",
        ApiError::internal(),
    ))
}
