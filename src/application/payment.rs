use crate::domain::money::Money;
use crate::domain::payment::{
    MSG_PAYMENT_FAILED, PaymentOutcome, PaymentPayload, SUPPORTED_METHODS,
};
use crate::domain::ports::PaymentGatewayBox;
use crate::error::{CheckoutError, Result};
use std::time::Duration;
use tracing::{debug, info, warn};

const CARD_NUMBER_LENGTHS: [usize; 2] = [15, 16];
const CVV_LENGTH: usize = 3;

/// ASCII `0-9` only; other Unicode digits are not valid card characters.
fn all_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Gates a validated order through payment-method and card checks before
/// handing it to the gateway.
pub struct PaymentProcessor {
    gateway: PaymentGatewayBox,
    timeout: Option<Duration>,
}

impl PaymentProcessor {
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self {
            gateway,
            timeout: None,
        }
    }

    /// Bounds every gateway call; an elapsed call counts as a decline.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Precondition check for the payment method.
    ///
    /// Returns `Err(InvalidPaymentMethod)` for anything outside the supported
    /// set. [`process_payment`](Self::process_payment) converts that error into
    /// an outcome instead of propagating it.
    pub fn validate_payment_method(&self, method: &str) -> Result<bool> {
        if SUPPORTED_METHODS.contains(&method) {
            Ok(true)
        } else {
            Err(CheckoutError::InvalidPaymentMethod {
                method: method.to_string(),
            })
        }
    }

    /// Card numbers are 15 or 16 decimal digits and the CVV exactly 3.
    /// No Luhn or issuer-prefix checks are made.
    pub fn validate_card_format(&self, card_number: &str, cvv: &str) -> bool {
        all_digits(card_number)
            && CARD_NUMBER_LENGTHS.contains(&card_number.len())
            && all_digits(cvv)
            && cvv.len() == CVV_LENGTH
    }

    /// Validates the method and card, then makes exactly one gateway call.
    ///
    /// Every failure comes back as a [`PaymentOutcome`]; this never returns an
    /// error.
    pub async fn process_payment(
        &self,
        amount: Money,
        method: &str,
        card_number: &str,
        cvv: &str,
    ) -> PaymentOutcome {
        if let Err(e) = self.validate_payment_method(method) {
            info!(method, "payment rejected: unsupported method");
            return PaymentOutcome::failed_validation(format!("Error: {e}"));
        }

        if !self.validate_card_format(card_number, cvv) {
            info!("payment rejected: malformed card details");
            return PaymentOutcome::failed_validation(MSG_PAYMENT_FAILED);
        }

        let payload = PaymentPayload {
            card_number: card_number.to_string(),
            cvv: cvv.to_string(),
            method: method.to_string(),
        };

        debug!(%amount, method, "calling payment gateway");
        if self.authorize(amount, &payload).await {
            PaymentOutcome::succeeded()
        } else {
            PaymentOutcome::declined()
        }
    }

    async fn authorize(&self, amount: Money, payload: &PaymentPayload) -> bool {
        let call = self.gateway.authorize(amount, payload);
        let result = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(result) => result,
                Err(_) => {
                    warn!(timeout_ms = limit.as_millis() as u64, "payment gateway timed out");
                    return false;
                }
            },
            None => call.await,
        };

        match result {
            Ok(approved) => {
                debug!(approved, "payment gateway answered");
                approved
            }
            Err(e) => {
                warn!(error = %e, "payment gateway failed");
                false
            }
        }
    }
}
