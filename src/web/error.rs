use crate::campaign::error::CampaignError;
use crate::error::ApplicationError;
use crate::recipient::error::ImportError;
use derive_getters::Getters;
use dto::field_error::FieldError;
use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, response};
use serde::{Deserialize, Serialize};

/// JSON body returned along with any error status.
#[derive(Debug, Getters, Serialize, Deserialize, PartialEq, Clone)]
pub struct ErrorBody {
    message: String,
    fields: Vec<FieldError>,
}

#[derive(Debug, Getters, PartialEq)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: Status, message: String) -> Self {
        Self {
            status,
            body: ErrorBody {
                message,
                fields: vec![],
            },
        }
    }

    pub fn internal() -> Self {
        Self::new(
            Status::InternalServerError,
            "Something went wrong, please try again.".to_owned(),
        )
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Import(error @ ImportError::UnsupportedFileType(_)) => {
                Self::new(Status::UnsupportedMediaType, error.to_string())
            }
            ApplicationError::Import(error @ ImportError::FileTooLarge { .. }) => {
                Self::new(Status::PayloadTooLarge, error.to_string())
            }
            ApplicationError::Profile(error) => Self::new(Status::NotFound, error.to_string()),
            ApplicationError::Campaign(CampaignError::Validation(error)) => Self {
                status: Status::UnprocessableEntity,
                body: ErrorBody {
                    message: error.to_string(),
                    fields: error.errors().clone(),
                },
            },
            ApplicationError::Campaign(error @ CampaignError::NoRecipients) => {
                Self::new(Status::UnprocessableEntity, error.to_string())
            }
            ApplicationError::Campaign(error @ CampaignError::Send(_)) => {
                error!("{error:#?}");
                Self::new(Status::BadGateway, error.to_string())
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}
