//! Client side of the contact form: local checks, submission and the
//! resulting display state.

use anyhow::Context;
use reqwest::{Client, StatusCode, Url};

use crate::domain::{ContactSubmission, NewContactMessage};
use crate::routes::ContactResponse;

pub const DEFAULT_SENT: &str = "Message sent!";
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
pub const NETWORK_FAILURE: &str = "Network error. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Sending,
    Sent(String),
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Honeypot, rendered invisible to people.
    pub company: String,
}

/// What came back from the endpoint. `body` is `None` when the response
/// was not the expected JSON, which the form treats as a failure.
#[derive(Debug, Clone)]
pub struct ServerReply {
    pub status: StatusCode,
    pub body: Option<ContactResponse>,
}

#[derive(Clone, Debug)]
pub struct ContactClient {
    http_client: Client,
    endpoint: Url,
}

impl ContactClient {
    pub fn new(site_url: &str) -> Result<Self, anyhow::Error> {
        let endpoint = Url::parse(site_url)
            .and_then(|url| url.join("api/contact"))
            .with_context(|| format!("{site_url} is not a valid site url."))?;

        Ok(Self {
            http_client: Client::new(),
            endpoint,
        })
    }

    #[tracing::instrument(name = "Posting the contact form", skip_all)]
    pub async fn send(&self, submission: &ContactSubmission) -> Result<ServerReply, reqwest::Error> {
        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        let body = response.json::<ContactResponse>().await.ok();

        Ok(ServerReply { status, body })
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: FormFields,
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validates locally and moves to `Sending`, returning the payload to
    /// post. Returns `None` when the form is invalid or a submission is
    /// already in flight; the latter is ignored rather than queued.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.state == FormState::Sending {
            return None;
        }

        let FormFields {
            name,
            email,
            message,
            company,
        } = &self.fields;

        if let Err(e) = NewContactMessage::parse(name.clone(), email.clone(), message.clone()) {
            self.state = FormState::Error(e);
            return None;
        }

        self.state = FormState::Sending;
        Some(ContactSubmission {
            name: name.clone(),
            email: email.clone(),
            message: message.clone(),
            company: (!company.is_empty()).then(|| company.clone()),
        })
    }

    pub fn complete(&mut self, outcome: Result<ServerReply, reqwest::Error>) {
        let reply = match outcome {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(error.message = %e, "Contact form request did not complete.");
                self.state = FormState::Error(NETWORK_FAILURE.into());
                return;
            }
        };

        // Anything but our JSON reply, even with a 2xx, is not a delivery.
        let Some(body) = reply.body else {
            self.state = FormState::Error(GENERIC_FAILURE.into());
            return;
        };

        if !reply.status.is_success() || !body.ok {
            let error = body.error.unwrap_or_else(|| GENERIC_FAILURE.into());
            self.state = FormState::Error(error);
            return;
        }

        let message = body.message.unwrap_or_else(|| DEFAULT_SENT.into());
        self.state = FormState::Sent(message);
        self.fields = FormFields::default();
    }

    pub async fn submit(&mut self, client: &ContactClient) -> &FormState {
        if let Some(submission) = self.begin_submit() {
            let outcome = client.send(&submission).await;
            self.complete(outcome);
        }
        &self.state
    }
}
