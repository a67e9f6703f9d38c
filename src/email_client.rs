use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::domain::MailboxAddress;

const SENDER_DISPLAY_NAME: &str = "Portfolio";

#[derive(Clone, Debug)]
pub struct EmailClient {
    http_client: Client,
    send_url: Url,
    sender: MailboxAddress,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: MailboxAddress,
        auth_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the email http client.")?;
        let send_url = send_url(&base_url)
            .with_context(|| format!("{base_url} is not a valid email api url."))?;

        Ok(Self {
            http_client,
            send_url,
            sender,
            auth_token,
        })
    }

    pub async fn send_email(
        &self,
        recipient: &MailboxAddress,
        reply_to: Option<&str>,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), reqwest::Error> {
        let body = SendEmailRequest {
            from: format!("{SENDER_DISPLAY_NAME} <{}>", self.sender.as_ref()),
            to: vec![recipient.as_ref()],
            subject,
            html: html_content,
            text: text_content,
            reply_to,
        };

        self.http_client
            .post(self.send_url.clone())
            .bearer_auth(self.auth_token.expose_secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// `emails` under the configured base, keeping any path prefix it has.
fn send_url(base_url: &str) -> Result<Url, anyhow::Error> {
    let mut base = Url::parse(base_url)?;
    if base.cannot_be_a_base() {
        anyhow::bail!("{base_url} cannot hold an api path.");
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("emails")?)
}
