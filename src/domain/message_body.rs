use unicode_segmentation::UnicodeSegmentation;

const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Please enter a message.".into());
        }
        if s.graphemes(true).count() > MAX_MESSAGE_LENGTH {
            return Err(format!(
                "Message must be at most {MAX_MESSAGE_LENGTH} characters long."
            ));
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
