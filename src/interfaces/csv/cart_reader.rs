use crate::domain::cart::Cart;
use crate::domain::money::Money;
use crate::error::{CheckoutError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use tracing::warn;

/// One row of a cart file: `name,price,quantity`. Quantity defaults to 1.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CartLine {
    pub name: String,
    pub price: Decimal,
    pub quantity: Option<u32>,
}

impl CartLine {
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    fn validated(self) -> Result<Self> {
        Money::non_negative(self.price)?;
        if self.quantity == Some(0) {
            return Err(CheckoutError::ValidationError(format!(
                "Quantity for '{}' must be at least 1",
                self.name
            )));
        }
        Ok(self)
    }
}

/// Reads cart lines from a CSV source.
///
/// Whitespace is trimmed and short records are accepted, so the quantity
/// column may be left out entirely.
pub struct CartReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CartReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes and validates each line.
    pub fn lines(self) -> impl Iterator<Item = Result<CartLine>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(CheckoutError::from)
                .and_then(CartLine::validated)
        })
    }

    /// Builds a cart from every readable line, logging and skipping the rest.
    pub fn into_cart(self) -> Cart {
        let mut cart = Cart::new();
        for line in self.lines() {
            let added = line.and_then(|line| {
                let quantity = line.quantity();
                cart.add_item(line.name, Money::new(line.price), quantity)
            });
            if let Err(e) = added {
                warn!(error = %e, "skipping cart line");
            }
        }
        cart
    }
}
