use super::{ContactEmail, ContactName, ContactSubmission, MessageBody};

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: ContactName,
    pub email: ContactEmail,
    pub body: MessageBody,
}

impl NewContactMessage {
    pub fn parse(name: String, email: String, body: String) -> Result<Self, String> {
        let name = ContactName::parse(name)?;
        let email = ContactEmail::parse(email)?;
        let body = MessageBody::parse(body)?;
        Ok(Self { name, email, body })
    }
}

impl TryFrom<ContactSubmission> for NewContactMessage {
    type Error = String;

    fn try_from(value: ContactSubmission) -> Result<Self, Self::Error> {
        Self::parse(value.name, value.email, value.message)
    }
}
