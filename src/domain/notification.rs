use crate::error::DispatchError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The notification channel a request is routed through.
///
/// Closed enumeration: every variant has exactly one registered sender
/// factory at startup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Sms,
    Email,
    InApp,
    Whatsapp,
}

impl NotificationChannel {
    pub const ALL: [Self; 4] = [Self::Sms, Self::Email, Self::InApp, Self::Whatsapp];
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Sms => "sms",
            Self::Email => "email",
            Self::InApp => "in_app",
            Self::Whatsapp => "whatsapp",
        };
        f.write_str(label)
    }
}

/// Represents a non-empty notification recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient(String);

impl Recipient {
    pub fn new(value: impl Into<String>) -> Result<Self, DispatchError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(DispatchError::ValidationError(
                "Recipient must not be empty".to_string(),
            ))
        } else {
            Ok(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Confirmation returned by a sender after a notification went out.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct NotificationReceipt {
    pub channel: NotificationChannel,
    pub recipient: String,
}

impl NotificationReceipt {
    pub fn new(channel: NotificationChannel, recipient: &Recipient) -> Self {
        Self {
            channel,
            recipient: recipient.as_str().to_string(),
        }
    }
}

impl fmt::Display for NotificationReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "notification sent via {} to {}", self.channel, self.recipient)
    }
}
