use super::alert::Alert;
use super::notification::{NotificationChannel, NotificationReceipt};
use super::payment::{PaymentMethod, PaymentReceipt};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Payment,
    Notification,
    Alert,
    CriticalAlert,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Payment => "payment",
            Self::Notification => "notification",
            Self::Alert => "alert",
            Self::CriticalAlert => "critical_alert",
        };
        f.write_str(label)
    }
}

/// One dispatch request as read from a CSV row.
///
/// Which optional fields are required depends on `kind`; the dispatcher
/// validates presence before calling a service.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct DispatchRequest {
    pub kind: RequestKind,
    pub method: Option<PaymentMethod>,
    pub channel: Option<NotificationChannel>,
    pub amount: Option<Decimal>,
    pub recipient: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
}

impl DispatchRequest {
    pub fn payment(method: PaymentMethod, amount: Decimal) -> Self {
        Self {
            kind: RequestKind::Payment,
            method: Some(method),
            channel: None,
            amount: Some(amount),
            recipient: None,
            title: None,
            message: None,
        }
    }

    pub fn notification(
        channel: NotificationChannel,
        recipient: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind: RequestKind::Notification,
            method: None,
            channel: Some(channel),
            amount: None,
            recipient: Some(recipient.into()),
            title: None,
            message: Some(message.into()),
        }
    }

    pub fn alert(
        kind: RequestKind,
        title: impl Into<String>,
        message: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            method: None,
            channel: None,
            amount: None,
            recipient: Some(recipient.into()),
            title: Some(title.into()),
            message: Some(message.into()),
        }
    }
}

/// The outcome of one dispatched request.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Receipt {
    Payment(PaymentReceipt),
    Notification(NotificationReceipt),
    Alert(Alert),
}

impl Receipt {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::Payment(_) => "payment",
            Self::Notification(_) => "notification",
            Self::Alert(_) => "alert",
        }
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment(receipt) => receipt.fmt(f),
            Self::Notification(receipt) => receipt.fmt(f),
            Self::Alert(alert) => alert.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_row_deserialization() {
        let csv = "kind, method, channel, amount, recipient, title, message\n\
                   payment, stripe, , 19.99, , ,";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let request: DispatchRequest = iter.next().unwrap().expect("Failed to deserialize row");
        assert_eq!(request.kind, RequestKind::Payment);
        assert_eq!(request.method, Some(PaymentMethod::Stripe));
        assert_eq!(request.amount, Some(dec!(19.99)));
        assert_eq!(request.channel, None);
        assert_eq!(request.recipient, None);
    }

    #[test]
    fn test_notification_row_deserialization() {
        let csv = "kind, method, channel, amount, recipient, title, message\n\
                   notification, , whatsapp, , +15550100, , Your order shipped";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let request: DispatchRequest = iter.next().unwrap().unwrap();
        assert_eq!(request.kind, RequestKind::Notification);
        assert_eq!(request.channel, Some(NotificationChannel::Whatsapp));
        assert_eq!(request.recipient.as_deref(), Some("+15550100"));
        assert_eq!(request.message.as_deref(), Some("Your order shipped"));
        assert_eq!(request.amount, None);
    }

    #[test]
    fn test_critical_alert_row_deserialization() {
        let csv = "kind, method, channel, amount, recipient, title, message\n\
                   critical_alert, , , , ops@example.com, Disk usage, volume /data at 91%";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let request: DispatchRequest = iter.next().unwrap().unwrap();
        assert_eq!(request.kind, RequestKind::CriticalAlert);
        assert_eq!(request.title.as_deref(), Some("Disk usage"));
    }

    #[test]
    fn test_receipt_serialization_is_tagged() {
        let receipt = Receipt::Notification(NotificationReceipt {
            channel: NotificationChannel::Sms,
            recipient: "+15550100".to_string(),
        });
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"kind\":\"notification\""));
        assert!(json.contains("\"channel\":\"sms\""));
    }
}
