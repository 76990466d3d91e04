use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for AlertPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        };
        f.write_str(label)
    }
}

/// The shared alert template: only the fields that have startup defaults.
///
/// Per-request fields (title, message, recipient) are supplied at
/// instantiation time and never live on the template. The template is built
/// once and never mutated afterwards; instantiation is a pure read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTemplate {
    pub real_time: bool,
    pub priority: AlertPriority,
}

impl Default for AlertTemplate {
    fn default() -> Self {
        Self {
            real_time: true,
            priority: AlertPriority::Medium,
        }
    }
}

impl AlertTemplate {
    pub fn new(real_time: bool, priority: AlertPriority) -> Self {
        Self {
            real_time,
            priority,
        }
    }

    /// Builds a new alert field by field: template defaults plus the
    /// per-request fields. The returned instance owns all of its state.
    pub fn instantiate(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Alert {
        Alert {
            title: title.into(),
            message: message.into(),
            recipient: recipient.into(),
            real_time: self.real_time,
            priority: self.priority,
        }
    }
}

/// A fully populated alert, independently owned by its creator.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub recipient: String,
    pub real_time: bool,
    pub priority: AlertPriority,
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alert '{}' for {} with priority {}",
            self.title, self.recipient, self.priority
        )
    }
}
