use super::money::Money;
use super::order::{OrderFilter, OrderRecord};
use super::payment::PaymentPayload;
use super::restaurant::{Restaurant, RestaurantQuery};
use crate::error::Result;
use async_trait::async_trait;

/// External funds-authorization capability.
///
/// `Ok(false)` is a decline. `Err` means the gateway could not be reached or
/// answered nonsense; callers treat it like a decline.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, amount: Money, payload: &PaymentPayload) -> Result<bool>;
}

/// Receives finalized orders.
#[async_trait]
pub trait OrderHistory: Send + Sync {
    async fn add_order(&self, record: OrderRecord) -> Result<()>;
    async fn view_order_history(&self) -> Result<Vec<OrderRecord>>;
    async fn filter_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRecord>>;
}

/// Supplies restaurants and their menus.
#[async_trait]
pub trait RestaurantCatalog: Send + Sync {
    async fn add_restaurant(&self, restaurant: Restaurant) -> Result<()>;
    async fn all(&self) -> Result<Vec<Restaurant>>;
    async fn search(&self, query: &RestaurantQuery) -> Result<Vec<Restaurant>>;
    async fn find(&self, name: &str) -> Result<Option<Restaurant>>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OrderHistoryBox = Box<dyn OrderHistory>;
pub type RestaurantCatalogBox = Box<dyn RestaurantCatalog>;
