use super::payment::PaymentProcessor;
use super::validator::OrderValidator;
use crate::domain::cart::Cart;
use crate::domain::menu::Menu;
use crate::domain::order::{OrderRecord, OrderStatus, OrderVerdict};
use crate::domain::payment::{PaymentOutcome, PaymentStatus};
use crate::domain::ports::OrderHistoryBox;
use crate::error::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

/// Final result of placing an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum OrderOutcome {
    /// The cart never reached payment.
    Rejected(OrderVerdict),
    /// The cart was valid and a payment was attempted.
    Processed(PaymentOutcome),
}

impl OrderOutcome {
    pub fn message(&self) -> String {
        match self {
            OrderOutcome::Rejected(verdict) => verdict.message(),
            OrderOutcome::Processed(payment) => payment.message.clone(),
        }
    }

    pub fn payment_status(&self) -> Option<PaymentStatus> {
        match self {
            OrderOutcome::Rejected(_) => None,
            OrderOutcome::Processed(payment) => Some(payment.status),
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.payment_status() == Some(PaymentStatus::Succeeded)
    }
}

/// Runs content validation, then payment, and hands confirmed orders to the
/// order history.
pub struct OrderWorkflow {
    validator: OrderValidator,
    processor: PaymentProcessor,
    history: OrderHistoryBox,
}

impl OrderWorkflow {
    pub fn new(processor: PaymentProcessor, history: OrderHistoryBox) -> Self {
        Self {
            validator: OrderValidator::new(),
            processor,
            history,
        }
    }

    /// Validates `cart` against `menu` and, only if that passes, charges
    /// `cart.total()`. A rejected cart never reaches the payment processor.
    pub async fn place_order(
        &self,
        cart: &Cart,
        menu: &Menu,
        payment_method: &str,
        card_number: &str,
        cvv: &str,
    ) -> OrderOutcome {
        let verdict = self.validator.validate(cart, menu);
        if !verdict.accepted {
            return OrderOutcome::Rejected(verdict);
        }

        let amount = match cart.total() {
            Ok(amount) => amount,
            Err(e) => {
                warn!(error = %e, "cart total cannot be charged");
                return OrderOutcome::Processed(PaymentOutcome::failed_validation(e.to_string()));
            }
        };
        let payment = self
            .processor
            .process_payment(amount, payment_method, card_number, cvv)
            .await;
        OrderOutcome::Processed(payment)
    }

    /// Appends a confirmed order to the history.
    ///
    /// Returns `Ok(None)` without touching the history when `outcome` is not a
    /// successful payment.
    pub async fn record_order(
        &self,
        order_id: impl Into<String>,
        date: NaiveDate,
        cart: &Cart,
        outcome: &OrderOutcome,
    ) -> Result<Option<OrderRecord>> {
        if !outcome.is_confirmed() {
            return Ok(None);
        }

        let record = OrderRecord {
            order_id: order_id.into(),
            items: cart.items().to_vec(),
            total: cart.total()?,
            status: OrderStatus::Confirmed,
            date,
        };
        info!(order_id = %record.order_id, total = %record.total, "recording confirmed order");
        self.history.add_order(record.clone()).await?;
        Ok(Some(record))
    }

    pub fn history(&self) -> &OrderHistoryBox {
        &self.history
    }
}
