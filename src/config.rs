//! TOML configuration for the checkout binary.
//!
//! Every section is optional. A missing file section falls back to its
//! `Default`, which approves every payment and carries no restaurants.

use crate::domain::money::Money;
use crate::domain::ports::RestaurantCatalog;
use crate::domain::restaurant::Restaurant;
use crate::error::{CheckoutError, Result};
use crate::infrastructure::gateway::{GatewayMode, SimulatedGateway};
use crate::infrastructure::in_memory::InMemoryRestaurantCatalog;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    pub logging: LoggingConfig,
    pub gateway: GatewayConfig,
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub mode: GatewayMode,
    /// Amounts above this are declined.
    pub limit: Option<Money>,
    pub timeout_ms: Option<u64>,
}

impl CheckoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(limit) = self.gateway.limit {
            Money::non_negative(limit.value())?;
        }
        for restaurant in &self.restaurants {
            if !restaurant.rating.is_finite() {
                return Err(CheckoutError::ValidationError(format!(
                    "Restaurant '{}' has a non-numeric rating",
                    restaurant.name
                )));
            }
            for entry in restaurant.menu.entries() {
                Money::non_negative(entry.price.value()).map_err(|_| {
                    CheckoutError::ValidationError(format!(
                        "Menu item '{}' at '{}' has a negative price",
                        entry.name, restaurant.name
                    ))
                })?;
            }
        }
        Ok(())
    }

    pub fn gateway(&self) -> SimulatedGateway {
        SimulatedGateway::new(self.gateway.mode, self.gateway.limit)
    }

    pub fn gateway_timeout(&self) -> Option<Duration> {
        self.gateway.timeout_ms.map(Duration::from_millis)
    }

    pub async fn catalog(&self) -> Result<InMemoryRestaurantCatalog> {
        let catalog = InMemoryRestaurantCatalog::new();
        for restaurant in &self.restaurants {
            catalog.add_restaurant(restaurant.clone()).await?;
        }
        Ok(catalog)
    }
}
