use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    /// Raised by the payment-method precondition check. The message carries no
    /// method name because callers render it verbatim to end users.
    #[error("Invalid payment method")]
    InvalidPaymentMethod { method: String },
    #[error("Gateway error: {0}")]
    GatewayError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Telemetry error: {0}")]
    TelemetryError(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
