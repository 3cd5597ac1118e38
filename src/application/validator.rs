use crate::domain::cart::Cart;
use crate::domain::menu::Menu;
use crate::domain::order::{OrderVerdict, VerdictReason};
use tracing::debug;

/// Decides whether a cart may proceed to payment.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderValidator;

impl OrderValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks `cart` against `menu`.
    ///
    /// An empty cart is rejected before the menu is consulted. Otherwise items
    /// are checked in cart insertion order and the first one missing from the
    /// menu is reported.
    pub fn validate(&self, cart: &Cart, menu: &Menu) -> OrderVerdict {
        if cart.is_empty() {
            debug!("rejecting order: cart is empty");
            return OrderVerdict::reject(VerdictReason::CartEmpty);
        }

        if let Some(missing) = cart.items().iter().find(|item| !menu.has_item(&item.name)) {
            debug!(item = %missing.name, "rejecting order: item not on menu");
            return OrderVerdict::reject(VerdictReason::ItemUnavailable {
                name: missing.name.clone(),
            });
        }

        OrderVerdict::accept()
    }
}
