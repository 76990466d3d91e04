use crate::domain::alert::{Alert, AlertPriority, AlertTemplate};

/// Mints alerts from the shared template.
///
/// The template is read-only; every call clones it into a fresh, independently
/// owned instance and merges in the per-request fields.
pub struct AlertService {
    template: AlertTemplate,
}

impl AlertService {
    pub fn new(template: AlertTemplate) -> Self {
        Self { template }
    }

    /// New alert with the template defaults left intact.
    pub fn create(&self, title: &str, message: &str, recipient: &str) -> Alert {
        self.template.instantiate(title, message, recipient)
    }

    /// Same as `create`, but the priority is forced to the highest severity,
    /// overriding the template default.
    pub fn create_critical(&self, title: &str, message: &str, recipient: &str) -> Alert {
        let mut alert = self.template.instantiate(title, message, recipient);
        alert.priority = AlertPriority::Critical;
        alert
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new(AlertTemplate::default())
    }
}
