use crate::domain::payment::{Amount, PaymentMethod, PaymentReceipt};
use crate::domain::ports::{AuditSinkArc, GatewayFactory, GatewayFactoryBox, PaymentGateway};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

// The external calls are stubbed: each gateway acknowledges the payment in
// the audit trail and returns a receipt.

#[derive(Debug)]
pub struct BankGateway {
    audit: AuditSinkArc,
}

impl BankGateway {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl PaymentGateway for BankGateway {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Bank
    }

    async fn pay(&self, amount: Amount) -> Result<PaymentReceipt> {
        tracing::info!(method = "bank", %amount, "processing payment");
        self.audit
            .append(format!("bank payment processed: amount {amount}"))
            .await?;
        Ok(PaymentReceipt::new(PaymentMethod::Bank, amount))
    }
}

#[derive(Debug)]
pub struct StripeGateway {
    audit: AuditSinkArc,
}

impl StripeGateway {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Stripe
    }

    async fn pay(&self, amount: Amount) -> Result<PaymentReceipt> {
        tracing::info!(method = "stripe", %amount, "processing payment");
        self.audit
            .append(format!("stripe payment processed: amount {amount}"))
            .await?;
        Ok(PaymentReceipt::new(PaymentMethod::Stripe, amount))
    }
}

#[derive(Debug)]
pub struct PaypalGateway {
    audit: AuditSinkArc,
}

impl PaypalGateway {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl PaymentGateway for PaypalGateway {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    async fn pay(&self, amount: Amount) -> Result<PaymentReceipt> {
        tracing::info!(method = "paypal", %amount, "processing payment");
        self.audit
            .append(format!("paypal payment processed: amount {amount}"))
            .await?;
        Ok(PaymentReceipt::new(PaymentMethod::Paypal, amount))
    }
}

#[derive(Debug)]
pub struct CryptoGateway {
    audit: AuditSinkArc,
}

impl CryptoGateway {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self { audit }
    }
}

#[async_trait]
impl PaymentGateway for CryptoGateway {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Crypto
    }

    async fn pay(&self, amount: Amount) -> Result<PaymentReceipt> {
        tracing::info!(method = "crypto", %amount, "processing payment");
        self.audit
            .append(format!("crypto payment processed: amount {amount}"))
            .await?;
        Ok(PaymentReceipt::new(PaymentMethod::Crypto, amount))
    }
}

/// Binds the bank method to a gateway instance built once at startup.
pub struct BankGatewayFactory {
    gateway: Arc<BankGateway>,
}

impl BankGatewayFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            gateway: Arc::new(BankGateway::new(audit)),
        }
    }
}

impl GatewayFactory for BankGatewayFactory {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Bank
    }

    fn gateway(&self) -> Arc<dyn PaymentGateway> {
        self.gateway.clone()
    }
}

pub struct StripeGatewayFactory {
    gateway: Arc<StripeGateway>,
}

impl StripeGatewayFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            gateway: Arc::new(StripeGateway::new(audit)),
        }
    }
}

impl GatewayFactory for StripeGatewayFactory {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Stripe
    }

    fn gateway(&self) -> Arc<dyn PaymentGateway> {
        self.gateway.clone()
    }
}

pub struct PaypalGatewayFactory {
    gateway: Arc<PaypalGateway>,
}

impl PaypalGatewayFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            gateway: Arc::new(PaypalGateway::new(audit)),
        }
    }
}

impl GatewayFactory for PaypalGatewayFactory {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Paypal
    }

    fn gateway(&self) -> Arc<dyn PaymentGateway> {
        self.gateway.clone()
    }
}

pub struct CryptoGatewayFactory {
    gateway: Arc<CryptoGateway>,
}

impl CryptoGatewayFactory {
    pub fn new(audit: AuditSinkArc) -> Self {
        Self {
            gateway: Arc::new(CryptoGateway::new(audit)),
        }
    }
}

impl GatewayFactory for CryptoGatewayFactory {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::Crypto
    }

    fn gateway(&self) -> Arc<dyn PaymentGateway> {
        self.gateway.clone()
    }
}

/// The complete, closed factory set: one factory per payment method.
pub fn default_gateway_factories(audit: &AuditSinkArc) -> Vec<GatewayFactoryBox> {
    vec![
        Box::new(BankGatewayFactory::new(audit.clone())),
        Box::new(StripeGatewayFactory::new(audit.clone())),
        Box::new(PaypalGatewayFactory::new(audit.clone())),
        Box::new(CryptoGatewayFactory::new(audit.clone())),
    ]
}
