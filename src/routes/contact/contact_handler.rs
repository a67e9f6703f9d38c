use actix_web::{HttpResponse, error::InternalError, web};

use crate::{
    contact_inbox::ContactInbox,
    domain::{ContactSubmission, NewContactMessage},
};

use super::{errors::ContactError, types::ContactResponse};

pub const NOT_CONFIGURED_NOTICE: &str =
    "Message received! Email delivery is not configured yet.";
pub const INVALID_BODY: &str = "Missing fields. Please fill out the form.";

/// Answers unreadable bodies with the same JSON shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error.message = %err, "Rejected an unreadable contact body");
        let response = HttpResponse::BadRequest().json(ContactResponse::failure(INVALID_BODY));
        InternalError::from_response(err, response).into()
    })
}

#[tracing::instrument(
    name = "Receiving a contact message",
    skip(body, inbox),
    fields(
        contact_email = tracing::field::Empty,
        contact_name = tracing::field::Empty
    )
)]
pub async fn contact(
    body: web::Json<serde_json::Value>,
    inbox: web::Data<Option<ContactInbox>>,
) -> Result<HttpResponse, ContactError> {
    let raw = body.into_inner();

    if ContactSubmission::honeypot_filled(&raw) {
        tracing::info!("Discarding a submission with a filled honeypot.");
        return Ok(HttpResponse::Ok().json(ContactResponse::success()));
    }

    let submission: ContactSubmission =
        serde_json::from_value(raw).map_err(ContactError::MalformedBody)?;

    let span = tracing::Span::current();
    span.record("contact_email", tracing::field::display(&submission.email));
    span.record("contact_name", tracing::field::display(&submission.name));

    let message = NewContactMessage::try_from(submission).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected an invalid contact message.");
        ContactError::ValidationError(e)
    })?;

    let Some(inbox) = inbox.get_ref().as_ref() else {
        tracing::info!(
            contact_name = %message.name.as_ref(),
            contact_email = %message.email.as_ref(),
            contact_message = %message.body.as_ref(),
            "Email delivery is not configured. Logging the contact message instead."
        );
        return Ok(HttpResponse::Ok().json(ContactResponse::received(NOT_CONFIGURED_NOTICE)));
    };

    inbox.deliver(&message).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to deliver a contact message."
        );
        ContactError::DeliveryError(e)
    })?;

    Ok(HttpResponse::Ok().json(ContactResponse::success()))
}
