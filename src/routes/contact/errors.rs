use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use super::super::helpers::error_chain_fmt;
use super::contact_handler::INVALID_BODY;
use super::types::ContactResponse;

pub const DELIVERY_FAILED: &str = "Server error. Please try again.";

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("{0}")]
    ValidationError(String),
    #[error("The contact body does not have the expected shape.")]
    MalformedBody(#[source] serde_json::Error),
    #[error("Failed to deliver the contact message.")]
    DeliveryError(#[source] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) | ContactError::MalformedBody(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<actix_web::body::BoxBody> {
        // Provider details stay in the logs.
        let body = match self {
            ContactError::ValidationError(message) => ContactResponse::failure(message.as_str()),
            ContactError::MalformedBody(_) => ContactResponse::failure(INVALID_BODY),
            ContactError::DeliveryError(_) => ContactResponse::failure(DELIVERY_FAILED),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
