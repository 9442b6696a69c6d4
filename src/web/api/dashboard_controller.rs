use crate::session::Session;
use crate::web::api::lock_session;
use crate::web::error::ApiError;
use dto::dashboard_stats::DashboardStats;
use rocket::State;
use rocket::serde::json::Json;
use std::sync::Mutex;

#[get("/dashboard")]
pub async fn get_dashboard(
    session: &State<Mutex<Session>>,
) -> Result<Json<DashboardStats>, ApiError> {
    let dashboard = lock_session(session)?.dashboard();

    Ok(Json(dashboard))
}
