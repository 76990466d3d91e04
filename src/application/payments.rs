use super::registry::{Keyed, Registry};
use crate::domain::payment::{Amount, PaymentMethod, PaymentReceipt};
use crate::domain::ports::{GatewayFactoryBox, PaymentGateway};
use crate::error::Result;
use rust_decimal::Decimal;
use std::sync::Arc;

impl Keyed for GatewayFactoryBox {
    type Key = PaymentMethod;

    fn key(&self) -> PaymentMethod {
        self.method()
    }
}

/// Routes payment requests to the gateway registered for their method.
///
/// The registry is built once from the complete factory set and is read-only
/// afterwards.
pub struct PaymentService {
    registry: Registry<GatewayFactoryBox>,
}

impl PaymentService {
    pub fn new(factories: Vec<GatewayFactoryBox>) -> Result<Self> {
        Ok(Self {
            registry: Registry::new(factories)?,
        })
    }

    /// Looks up the gateway bound to `method`.
    pub fn resolve(&self, method: PaymentMethod) -> Result<Arc<dyn PaymentGateway>> {
        Ok(self.registry.resolve(method)?.gateway())
    }

    /// Validates the amount, resolves the gateway and submits the payment.
    ///
    /// A negative amount is rejected before any gateway effect runs.
    pub async fn pay(&self, method: PaymentMethod, amount: Decimal) -> Result<PaymentReceipt> {
        let amount = Amount::new(amount)?;
        let gateway = self.resolve(method)?;
        gateway.pay(amount).await
    }
}
