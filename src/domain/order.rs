use super::cart::CartItem;
use super::money::Money;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the validator accepted or rejected a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerdictReason {
    CartEmpty,
    ItemUnavailable { name: String },
    Valid,
}

impl fmt::Display for VerdictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerdictReason::CartEmpty => write!(f, "Cart is empty"),
            VerdictReason::ItemUnavailable { name } => write!(f, "{name} is not available"),
            VerdictReason::Valid => write!(f, "Order is valid"),
        }
    }
}

/// Accept/reject decision for a cart against a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderVerdict {
    pub accepted: bool,
    pub reason: VerdictReason,
}

impl OrderVerdict {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: VerdictReason::Valid,
        }
    }

    pub fn reject(reason: VerdictReason) -> Self {
        Self {
            accepted: false,
            reason,
        }
    }

    pub fn message(&self) -> String {
        self.reason.to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Delivered,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// A finalized order as handed to the order-history collaborator.
///
/// Identifiers and dates come from the caller; nothing in this crate
/// generates them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct OrderRecord {
    pub order_id: String,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

/// Conjunctive filter over order records. `None` matches everything.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub date: Option<NaiveDate>,
}

impl OrderFilter {
    pub fn matches(&self, record: &OrderRecord) -> bool {
        self.status.is_none_or(|status| record.status == status)
            && self.date.is_none_or(|date| record.date == date)
    }
}
