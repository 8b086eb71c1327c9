use std::fmt;
use std::str::FromStr;

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageSender {
    User,
    Ai,
}

impl MessageSender {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSender::User => "user",
            MessageSender::Ai => "ai",
        }
    }

    /// Label used when the message is rendered into a prompt.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            MessageSender::User => "Customer",
            MessageSender::Ai => "Support",
        }
    }
}

impl FromStr for MessageSender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(MessageSender::User),
            "ai" => Ok(MessageSender::Ai),
            _ => Err(format!("Invalid message sender: {}", s)),
        }
    }
}

impl fmt::Display for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
