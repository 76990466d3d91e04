use super::registry::{Keyed, Registry};
use crate::domain::notification::{NotificationChannel, NotificationReceipt, Recipient};
use crate::domain::ports::{NotificationSender, SenderFactoryBox};
use crate::error::Result;
use std::sync::Arc;

impl Keyed for SenderFactoryBox {
    type Key = NotificationChannel;

    fn key(&self) -> NotificationChannel {
        self.channel()
    }
}

/// Routes notification requests to the sender registered for their channel.
pub struct NotificationService {
    registry: Registry<SenderFactoryBox>,
}

impl NotificationService {
    pub fn new(factories: Vec<SenderFactoryBox>) -> Result<Self> {
        Ok(Self {
            registry: Registry::new(factories)?,
        })
    }

    /// Looks up the sender bound to `channel`.
    pub fn resolve(&self, channel: NotificationChannel) -> Result<Arc<dyn NotificationSender>> {
        Ok(self.registry.resolve(channel)?.sender())
    }

    /// Validates the recipient, resolves the sender and delivers the message.
    pub async fn send(
        &self,
        channel: NotificationChannel,
        to: &str,
        message: &str,
    ) -> Result<NotificationReceipt> {
        let to = Recipient::new(to)?;
        let sender = self.resolve(channel)?;
        sender.send(&to, message).await
    }
}
