use crate::domain::order::{OrderFilter, OrderRecord};
use crate::domain::ports::{OrderHistory, RestaurantCatalog};
use crate::domain::restaurant::{Restaurant, RestaurantQuery};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order history.
///
/// Records are kept in the order they were added.
#[derive(Default, Clone)]
pub struct InMemoryOrderHistory {
    orders: Arc<RwLock<Vec<OrderRecord>>>,
}

impl InMemoryOrderHistory {
    /// Creates a new, empty order history.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderHistory for InMemoryOrderHistory {
    async fn add_order(&self, record: OrderRecord) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.push(record);
        Ok(())
    }

    async fn view_order_history(&self) -> Result<Vec<OrderRecord>> {
        let orders = self.orders.read().await;
        Ok(orders.clone())
    }

    async fn filter_orders(&self, filter: &OrderFilter) -> Result<Vec<OrderRecord>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect())
    }
}

/// A thread-safe in-memory restaurant catalog.
///
/// Restaurants are returned in the order they were added. Adding a restaurant
/// whose name already exists replaces it in place.
#[derive(Default, Clone)]
pub struct InMemoryRestaurantCatalog {
    restaurants: Arc<RwLock<Vec<Restaurant>>>,
}

impl InMemoryRestaurantCatalog {
    /// Creates a new, empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RestaurantCatalog for InMemoryRestaurantCatalog {
    async fn add_restaurant(&self, restaurant: Restaurant) -> Result<()> {
        let mut restaurants = self.restaurants.write().await;
        match restaurants.iter_mut().find(|r| r.name == restaurant.name) {
            Some(existing) => *existing = restaurant,
            None => restaurants.push(restaurant),
        }
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants.clone())
    }

    async fn search(&self, query: &RestaurantQuery) -> Result<Vec<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect())
    }

    async fn find(&self, name: &str) -> Result<Option<Restaurant>> {
        let restaurants = self.restaurants.read().await;
        Ok(restaurants.iter().find(|r| r.name == name).cloned())
    }
}
