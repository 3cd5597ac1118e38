use serde::{Deserialize, Serialize};

pub const MSG_PAYMENT_SUCCEEDED: &str = "Payment successful, Order confirmed";
/// Shared by local card-format rejections and gateway declines.
pub const MSG_PAYMENT_FAILED: &str = "Payment failed, please try again";

/// Payment methods accepted by the processor.
pub const SUPPORTED_METHODS: &[&str] = &["credit_card"];

/// Credentials forwarded to the gateway.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentPayload {
    pub card_number: String,
    pub cvv: String,
    pub method: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    FailedValidation,
    FailedGateway,
}

/// Categorized result of a payment attempt.
///
/// `status` lets callers branch without matching on `message`, which is kept
/// textually identical for card-format failures and gateway declines.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentOutcome {
    pub status: PaymentStatus,
    pub message: String,
}

impl PaymentOutcome {
    pub fn succeeded() -> Self {
        Self {
            status: PaymentStatus::Succeeded,
            message: MSG_PAYMENT_SUCCEEDED.to_string(),
        }
    }

    pub fn failed_validation(message: impl Into<String>) -> Self {
        Self {
            status: PaymentStatus::FailedValidation,
            message: message.into(),
        }
    }

    pub fn declined() -> Self {
        Self {
            status: PaymentStatus::FailedGateway,
            message: MSG_PAYMENT_FAILED.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }
}
