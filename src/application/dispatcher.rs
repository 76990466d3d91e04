use super::alerts::AlertService;
use super::notifications::NotificationService;
use super::payments::PaymentService;
use crate::domain::request::{DispatchRequest, Receipt, RequestKind};
use crate::error::{DispatchError, Result};

/// The request-handling boundary: decodes a request row, checks the fields
/// its kind requires, and calls the matching service.
pub struct Dispatcher {
    payments: PaymentService,
    notifications: NotificationService,
    alerts: AlertService,
}

fn require<T>(field: Option<T>, name: &str, kind: RequestKind) -> Result<T> {
    field.ok_or_else(|| {
        DispatchError::ValidationError(format!("{kind} request missing '{name}'"))
    })
}

impl Dispatcher {
    pub fn new(
        payments: PaymentService,
        notifications: NotificationService,
        alerts: AlertService,
    ) -> Self {
        Self {
            payments,
            notifications,
            alerts,
        }
    }

    pub async fn dispatch(&self, request: DispatchRequest) -> Result<Receipt> {
        match request.kind {
            RequestKind::Payment => {
                let method = require(request.method, "method", request.kind)?;
                let amount = require(request.amount, "amount", request.kind)?;
                let receipt = self.payments.pay(method, amount).await?;
                Ok(Receipt::Payment(receipt))
            }
            RequestKind::Notification => {
                let channel = require(request.channel, "channel", request.kind)?;
                let recipient = require(request.recipient, "recipient", request.kind)?;
                let message = require(request.message, "message", request.kind)?;
                let receipt = self
                    .notifications
                    .send(channel, &recipient, &message)
                    .await?;
                Ok(Receipt::Notification(receipt))
            }
            RequestKind::Alert | RequestKind::CriticalAlert => {
                let title = require(request.title, "title", request.kind)?;
                let message = require(request.message, "message", request.kind)?;
                let recipient = require(request.recipient, "recipient", request.kind)?;
                let alert = if request.kind == RequestKind::CriticalAlert {
                    self.alerts.create_critical(&title, &message, &recipient)
                } else {
                    self.alerts.create(&title, &message, &recipient)
                };
                Ok(Receipt::Alert(alert))
            }
        }
    }
}
