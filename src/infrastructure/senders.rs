use crate::domain::notification::{NotificationChannel, NotificationReceipt, Recipient};
use crate::domain::ports::{AuditSinkArc, NotificationSender, SenderFactory, SenderFactoryBox};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

// Deliveries are stubbed the same way as payments: an audit acknowledgement
// stands in for the external send.

#[derive(Debug)]
pub struct SmsSender {
    audit: AuditSinkArc,
}

impl SmsSender {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl NotificationSender for SmsSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Sms
    }

    async fn send(&self, to: &Recipient, message: &str) -> Result<NotificationReceipt> {
        tracing::info!(channel = "sms", recipient = %to, "sending notification");
        self.audit
            .append(format!("sms notification sent to {to}: {message}"))
            .await?;
        Ok(NotificationReceipt::new(NotificationChannel::Sms, to))
    }
}

#[derive(Debug)]
pub struct EmailSender {
    audit: AuditSinkArc,
}

impl EmailSender {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl NotificationSender for EmailSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Email
    }

    async fn send(&self, to: &Recipient, message: &str) -> Result<NotificationReceipt> {
        tracing::info!(channel = "email", recipient = %to, "sending notification");
        self.audit
            .append(format!("email notification sent to {to}: {message}"))
            .await?;
        Ok(NotificationReceipt::new(NotificationChannel::Email, to))
    }
}

#[derive(Debug)]
pub struct InAppSender {
    audit: AuditSinkArc,
}

impl InAppSender {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl NotificationSender for InAppSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::InApp
    }

    async fn send(&self, to: &Recipient, message: &str) -> Result<NotificationReceipt> {
        tracing::info!(channel = "in_app", recipient = %to, "sending notification");
        self.audit
            .append(format!("in_app notification sent to {to}: {message}"))
            .await?;
        Ok(NotificationReceipt::new(NotificationChannel::InApp, to))
    }
}

#[derive(Debug)]
pub struct WhatsappSender {
    audit: AuditSinkArc,
}

impl WhatsappSender {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl NotificationSender for WhatsappSender {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Whatsapp
    }

    async fn send(&self, to: &Recipient, message: &str) -> Result<NotificationReceipt> {
        tracing::info!(channel = "whatsapp", recipient = %to, "sending notification");
        self.audit
            .append(format!("whatsapp notification sent to {to}: {message}"))
            .await?;
        Ok(NotificationReceipt::new(NotificationChannel::Whatsapp, to))
    }
}

/// Binds the sms channel to a sender instance built once at startup.
pub struct SmsSenderFactory {
    sender: Arc<SmsSender>,
}

impl SmsSenderFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            sender: Arc::new(SmsSender::new(audit)),
        }
    }
}

impl SenderFactory for SmsSenderFactory {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Sms
    }

    fn sender(&self) -> Arc<dyn NotificationSender> {
        self.sender.clone()
    }
}

pub struct EmailSenderFactory {
    sender: Arc<EmailSender>,
}

impl EmailSenderFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            sender: Arc::new(EmailSender::new(audit)),
        }
    }
}

impl SenderFactory for EmailSenderFactory {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Email
    }

    fn sender(&self) -> Arc<dyn NotificationSender> {
        self.sender.clone()
    }
}

pub struct InAppSenderFactory {
    sender: Arc<InAppSender>,
}

impl InAppSenderFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            sender: Arc::new(InAppSender::new(audit)),
        }
    }
}

impl SenderFactory for InAppSenderFactory {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::InApp
    }

    fn sender(&self) -> Arc<dyn NotificationSender> {
        self.sender.clone()
    }
}

pub struct WhatsappSenderFactory {
    sender: Arc<WhatsappSender>,
}

impl WhatsappSenderFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            sender: Arc::new(WhatsappSender::new(audit)),
        }
    }
}

impl SenderFactory for WhatsappSenderFactory {
    fn channel(&self) -> NotificationChannel {
        NotificationChannel::Whatsapp
    }

    fn sender(&self) -> Arc<dyn NotificationSender> {
        self.sender.clone()
    }
}

/// The complete, closed factory set: one factory per notification channel.
pub fn default_sender_factories(audit: &AuditSinkArc) -> Vec<SenderFactoryBox> {
    vec![
        Box::new(SmsSenderFactory::new(audit.clone())),
        Box::new(EmailSenderFactory::new(audit.clone())),
        Box::new(InAppSenderFactory::new(audit.clone())),
        Box::new(WhatsappSenderFactory::new(audit.clone())),
    ]
}
