use super::audit::AuditEntry;
use super::notification::{NotificationChannel, NotificationReceipt, Recipient};
use super::payment::{Amount, PaymentMethod, PaymentReceipt};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A payment gateway capable of submitting an amount through one channel.
///
/// All variants are interchangeable: callers depend on this trait only, never
/// on a concrete gateway.
#[async_trait]
pub trait PaymentGateway: Send + Sync + std::fmt::Debug {
    fn method(&self) -> PaymentMethod;
    async fn pay(&self, amount: Amount) -> Result<PaymentReceipt>;
}

/// A notification sender capable of delivering a message through one channel.
#[async_trait]
pub trait NotificationSender: Send + Sync + std::fmt::Debug {
    fn channel(&self) -> NotificationChannel;
    async fn send(&self, to: &Recipient, message: &str) -> Result<NotificationReceipt>;
}

/// One-to-one binding between a payment method and the gateway serving it.
///
/// Factories are created once at startup, are stateless beyond the binding,
/// and are owned exclusively by the registry.
pub trait GatewayFactory: Send + Sync {
    fn method(&self) -> PaymentMethod;
    fn gateway(&self) -> Arc<dyn PaymentGateway>;
}

/// One-to-one binding between a notification channel and the sender serving it.
pub trait SenderFactory: Send + Sync {
    fn channel(&self) -> NotificationChannel;
    fn sender(&self) -> Arc<dyn NotificationSender>;
}

/// Append-only audit trail. `list` returns a snapshot copy of the entries.
#[async_trait]
pub trait AuditSink: Send + Sync + std::fmt::Debug {
    async fn append(&self, message: String) -> Result<()>;
    async fn list(&self) -> Result<Vec<AuditEntry>>;
    async fn clear(&self) -> Result<()>;
}

pub type GatewayFactoryBox = Box<dyn GatewayFactory>;
pub type SenderFactoryBox = Box<dyn SenderFactory>;
pub type AuditSinkArc = Arc<dyn AuditSink>;
