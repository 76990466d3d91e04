use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of the audit trail, stamped at append time.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct AuditEntry {
    pub at: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            at: Utc::now(),
            message: message.into(),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.at.to_rfc3339(), self.message)
    }
}
