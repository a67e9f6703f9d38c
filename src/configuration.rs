use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::contact_inbox::ContactInbox;
use crate::domain::MailboxAddress;
use crate::email_client::EmailClient;

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

/// Email delivery is live only when both `auth_token` and
/// `recipient_email` are set; otherwise messages are only logged.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    #[serde(default)]
    pub auth_token: Option<SecretString>,
    #[serde(default)]
    pub recipient_email: Option<String>,
    pub timeout_ms: u64,
}

impl EmailClientSettings {
    pub fn inbox(&self) -> Result<Option<ContactInbox>, anyhow::Error> {
        let auth_token = self
            .auth_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty());
        let recipient = self
            .recipient_email
            .as_deref()
            .map(str::trim)
            .filter(|recipient| !recipient.is_empty());

        let (Some(auth_token), Some(recipient)) = (auth_token, recipient) else {
            return Ok(None);
        };

        let recipient =
            MailboxAddress::try_from(recipient.to_owned()).map_err(anyhow::Error::msg)?;
        let email_client = EmailClient::new(
            self.base_url.clone(),
            self.sender()?,
            auth_token.clone(),
            self.timeout(),
        )?;

        Ok(Some(ContactInbox::new(email_client, recipient)))
    }

    pub fn sender(&self) -> Result<MailboxAddress, anyhow::Error> {
        MailboxAddress::try_from(self.sender_email.clone()).map_err(anyhow::Error::msg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base.yaml")).required(true))
        .add_source(
            config::File::from(conf_dir.join(format!("{}.yaml", env.as_str()))).required(true),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
