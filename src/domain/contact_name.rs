use unicode_segmentation::UnicodeSegmentation;

const MAX_NAME_LENGTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("Please enter your name.".into());
        }
        if trimmed.graphemes(true).count() > MAX_NAME_LENGTH {
            return Err(format!(
                "Name must be at most {MAX_NAME_LENGTH} characters long."
            ));
        }

        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
