use crate::session::Session;
use crate::tools::log_error_and_return;
use crate::web::api::lock_session;
use crate::web::error::ApiError;
use dto::duplicate_group::DuplicateGroup;
use dto::recipient::Recipient;
use rocket::State;
use rocket::data::{Data, ToByteUnit};
use rocket::http::{ContentType, Status};
use rocket::serde::json::{Json, Value, json};
use std::sync::Mutex;

/// Replace every recipient with the ones listed in the uploaded CSV file.
/// The body is read one byte past the limit, so that an oversized file is reported as such.
#[post("/recipients/import", data = "<file>")]
pub async fn import_recipients(
    session: &State<Mutex<Session>>,
    content_type: Option<&ContentType>,
    file: Data<'_>,
) -> Result<Value, ApiError> {
    let max_size = *lock_session(session)?.upload_config().max_size();
    let bytes = file
        .open(max_size.saturating_add(1).bytes())
        .into_bytes()
        .await
        .map_err(log_error_and_return(ApiError::new(
            Status::BadRequest,
            "The uploaded file couldn't be read.".to_owned(),
        )))?;
    let content_type = content_type
        .map(|content_type| content_type.to_string())
        .unwrap_or_default();

    let imported = lock_session(session)?.import_recipients(&content_type, &bytes)?;

    Ok(json!({ "imported": imported }))
}

#[get("/recipients?<search>&<duplicates>")]
pub async fn list_recipients(
    session: &State<Mutex<Session>>,
    search: Option<&str>,
    duplicates: Option<bool>,
) -> Result<Json<Vec<Recipient>>, ApiError> {
    let session = lock_session(session)?;
    let recipients =
        session.list_recipients(search.unwrap_or_default(), duplicates.unwrap_or_default());

    Ok(Json(recipients))
}

#[post("/recipients", format = "application/json", data = "<recipient>")]
pub async fn add_recipient(
    session: &State<Mutex<Session>>,
    recipient: Json<Recipient>,
) -> Result<Status, ApiError> {
    lock_session(session)?.add_recipient(recipient.into_inner());

    Ok(Status::Created)
}

/// Remove every recipient having this email, regardless of case.
#[delete("/recipients/<email>")]
pub async fn remove_recipient(
    session: &State<Mutex<Session>>,
    email: &str,
) -> Result<Value, ApiError> {
    let removed = lock_session(session)?.remove_recipient(email);

    Ok(json!({ "removed": removed }))
}

#[get("/recipients/duplicates")]
pub async fn list_duplicates(
    session: &State<Mutex<Session>>,
) -> Result<Json<Vec<DuplicateGroup>>, ApiError> {
    let groups = lock_session(session)?.directory().find_duplicate_groups();

    Ok(Json(groups))
}

#[post("/recipients/merge", format = "application/json", data = "<emails>")]
pub async fn merge_recipients(
    session: &State<Mutex<Session>>,
    emails: Json<Vec<String>>,
) -> Result<Value, ApiError> {
    let removed = lock_session(session)?.merge_recipients(&emails);

    Ok(json!({ "removed": removed }))
}

#[post("/recipients/merge-all")]
pub async fn merge_all_duplicates(session: &State<Mutex<Session>>) -> Result<Value, ApiError> {
    let removed = lock_session(session)?.merge_all_duplicates();

    Ok(json!({ "removed": removed }))
}
