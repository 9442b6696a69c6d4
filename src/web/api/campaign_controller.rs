use crate::session::Session;
use crate::web::api::lock_session;
use crate::web::error::ApiError;
use dto::campaign::{CampaignDraft, SendReport};
use dto::email_preview::EmailPreview;
use dto::recipient::Recipient;
use rocket::State;
use rocket::serde::json::Json;
use std::sync::Mutex;

#[get("/campaign")]
pub async fn get_draft(session: &State<Mutex<Session>>) -> Result<Json<CampaignDraft>, ApiError> {
    let draft = lock_session(session)?.draft().clone();

    Ok(Json(draft))
}

/// Use a sender profile for the campaign, replacing subject & message with its templates.
#[post("/campaign/profile/<id>")]
pub async fn select_profile(
    session: &State<Mutex<Session>>,
    id: &str,
) -> Result<Json<CampaignDraft>, ApiError> {
    let mut session = lock_session(session)?;
    session.select_profile(id)?;

    Ok(Json(session.draft().clone()))
}

#[put("/campaign/subject", format = "application/json", data = "<subject>")]
pub async fn set_subject(
    session: &State<Mutex<Session>>,
    subject: Json<String>,
) -> Result<Json<CampaignDraft>, ApiError> {
    let mut session = lock_session(session)?;
    session.set_subject(subject.into_inner());

    Ok(Json(session.draft().clone()))
}

#[put("/campaign/message", format = "application/json", data = "<message>")]
pub async fn set_message(
    session: &State<Mutex<Session>>,
    message: Json<String>,
) -> Result<Json<CampaignDraft>, ApiError> {
    let mut session = lock_session(session)?;
    session.set_message(message.into_inner());

    Ok(Json(session.draft().clone()))
}

#[put("/campaign/countries", format = "application/json", data = "<countries>")]
pub async fn set_countries(
    session: &State<Mutex<Session>>,
    countries: Json<Vec<String>>,
) -> Result<Json<CampaignDraft>, ApiError> {
    let mut session = lock_session(session)?;
    session.set_selected_countries(countries.into_inner());

    Ok(Json(session.draft().clone()))
}

#[get("/campaign/targets")]
pub async fn list_targets(
    session: &State<Mutex<Session>>,
) -> Result<Json<Vec<Recipient>>, ApiError> {
    let targets = lock_session(session)?.targets();

    Ok(Json(targets))
}

#[get("/campaign/preview")]
pub async fn preview(session: &State<Mutex<Session>>) -> Result<Json<EmailPreview>, ApiError> {
    let preview = lock_session(session)?.preview();

    Ok(Json(preview))
}

#[post("/campaign/send")]
pub async fn send_campaign(
    session: &State<Mutex<Session>>,
) -> Result<Json<SendReport>, ApiError> {
    let report = lock_session(session)?.submit()?;

    Ok(Json(report))
}
