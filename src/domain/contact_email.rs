/// Reply address typed by a visitor. Only the presence of an `@` is
/// checked; the address is never used as a delivery target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Please enter your email address.".into());
        }
        if !trimmed.contains('@') {
            return Err("Please enter a valid email address.".into());
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
