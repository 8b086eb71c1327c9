/// Upper bound on user-authored message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// User input that passed validation. Holds the trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageTextError {
    #[error("Message cannot be empty")]
    Empty,
    #[error("Message cannot exceed {max} characters")]
    TooLong { max: usize, actual: usize },
}

impl MessageText {
    /// The length limit applies to the raw input; the emptiness check to the trimmed one.
    pub fn parse(raw: &str) -> Result<Self, MessageTextError> {
        let actual = raw.chars().count();
        if actual > MAX_MESSAGE_CHARS {
            return Err(MessageTextError::TooLong {
                max: MAX_MESSAGE_CHARS,
                actual,
            });
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(MessageTextError::Empty);
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for MessageText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
