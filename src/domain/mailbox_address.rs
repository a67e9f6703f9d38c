use validator::ValidateEmail;

/// An address the site itself sends from or delivers to, as configured by
/// the operator. Held to a stricter standard than visitor input.
#[derive(Debug, Clone)]
pub struct MailboxAddress(String);

impl MailboxAddress {
    pub fn parse(s: String) -> Result<Self, String> {
        if !s.validate_email() {
            return Err(format!("{s} is not a valid mailbox address."));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for MailboxAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MailboxAddress {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        MailboxAddress::parse(value)
    }
}
