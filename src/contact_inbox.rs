use anyhow::Context;

use crate::domain::{MailboxAddress, NewContactMessage};
use crate::email_client::EmailClient;

const NOTIFICATION_TEMPLATE: &str = include_str!("../views/contact_notification.html");

/// Where contact form messages end up when email delivery is configured.
#[derive(Clone, Debug)]
pub struct ContactInbox {
    email_client: EmailClient,
    recipient: MailboxAddress,
}

impl ContactInbox {
    pub fn new(email_client: EmailClient, recipient: MailboxAddress) -> Self {
        Self {
            email_client,
            recipient,
        }
    }

    #[tracing::instrument(name = "Delivering a contact message", skip(self, message))]
    pub async fn deliver(&self, message: &NewContactMessage) -> Result<(), anyhow::Error> {
        let subject = format!("New message from {}", message.name.as_ref());
        let html = notification_html(message)?;
        let text = notification_text(message);

        self.email_client
            .send_email(
                &self.recipient,
                Some(message.email.as_ref()),
                &subject,
                &html,
                &text,
            )
            .await
            .context("The email provider rejected the contact notification.")
    }
}

pub fn notification_text(message: &NewContactMessage) -> String {
    format!(
        "Name: {}\nEmail: {}\n\n{}",
        message.name.as_ref(),
        message.email.as_ref(),
        message.body.as_ref()
    )
}

pub fn notification_html(message: &NewContactMessage) -> Result<String, anyhow::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("name", message.name.as_ref());
    ctx.insert("email", message.email.as_ref());
    ctx.insert("message", message.body.as_ref());

    tera::Tera::one_off(NOTIFICATION_TEMPLATE, &ctx, true)
        .context("Failed rendering the contact notification template.")
}
