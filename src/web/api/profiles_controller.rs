use crate::session::Session;
use crate::web::api::lock_session;
use crate::web::error::ApiError;
use dto::sender_profile::{ProfileForm, SenderProfile};
use rocket::State;
use rocket::http::Status;
use rocket::serde::json::Json;
use std::sync::Mutex;

#[get("/profiles")]
pub async fn list_profiles(
    session: &State<Mutex<Session>>,
) -> Result<Json<Vec<SenderProfile>>, ApiError> {
    let profiles = lock_session(session)?.profiles().to_vec();

    Ok(Json(profiles))
}

#[post("/profiles", format = "application/json", data = "<form>")]
pub async fn create_profile(
    session: &State<Mutex<Session>>,
    form: Json<ProfileForm>,
) -> Result<(Status, Json<SenderProfile>), ApiError> {
    let profile = lock_session(session)?.add_profile(form.into_inner());

    Ok((Status::Created, Json(profile)))
}

#[put("/profiles/<id>", format = "application/json", data = "<form>")]
pub async fn update_profile(
    session: &State<Mutex<Session>>,
    id: &str,
    form: Json<ProfileForm>,
) -> Result<Json<SenderProfile>, ApiError> {
    let profile = lock_session(session)?.update_profile(id, form.into_inner())?;

    Ok(Json(profile))
}

/// Delete a profile. The campaign draft falls back on another profile when it used this one.
#[delete("/profiles/<id>")]
pub async fn delete_profile(
    session: &State<Mutex<Session>>,
    id: &str,
) -> Result<Json<SenderProfile>, ApiError> {
    let profile = lock_session(session)?.delete_profile(id)?;

    Ok(Json(profile))
}

#[post("/profiles/<id>/default")]
pub async fn set_default_profile(
    session: &State<Mutex<Session>>,
    id: &str,
) -> Result<Status, ApiError> {
    lock_session(session)?.set_default_profile(id)?;

    Ok(Status::NoContent)
}
