use super::money::Money;
use crate::error::{CheckoutError, Result};
use serde::{Deserialize, Serialize};

/// A single line of a cart.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct CartItem {
    /// Unique key within a cart.
    pub name: String,
    /// Price recorded by the first addition of this name.
    pub unit_price: Money,
    /// Always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> Result<Money> {
        self.unit_price.checked_mul(self.quantity).ok_or_else(|| {
            CheckoutError::ValidationError(format!("Line total for '{}' is too large", self.name))
        })
    }
}

/// A per-session collection of requested items.
///
/// Items keep insertion order so that anything iterating over them (the order
/// validator in particular) sees a stable sequence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `name`.
    ///
    /// If the name is already present its quantity grows and its unit price is
    /// left untouched. A zero quantity leaves the cart unchanged.
    ///
    /// Fails with a `ValidationError`, leaving the cart as it was, when the
    /// quantity or the resulting cart total would overflow.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<()> {
        if quantity == 0 {
            return Ok(());
        }
        let name = name.into();
        let mut updated = self.items.clone();
        match updated.iter_mut().find(|item| item.name == name) {
            Some(item) => {
                item.quantity = item.quantity.checked_add(quantity).ok_or_else(|| {
                    CheckoutError::ValidationError(format!("Quantity for '{name}' is too large"))
                })?;
            }
            None => updated.push(CartItem {
                name,
                unit_price,
                quantity,
            }),
        }
        Self::sum(&updated)?;
        self.items = updated;
        Ok(())
    }

    /// Removes `name` if present; removing an absent item is not an error.
    pub fn remove_item(&mut self, name: &str) {
        self.items.retain(|item| item.name != name);
    }

    /// Sum of every line total. Only fails for carts holding prices that
    /// cannot be summed, which `add_item` refuses to build from non-negative
    /// prices.
    pub fn total(&self) -> Result<Money> {
        Self::sum(&self.items)
    }

    fn sum(items: &[CartItem]) -> Result<Money> {
        let lines = items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>>>()?;
        Money::checked_sum(lines)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, name: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
