use super::menu::Menu;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Restaurant {
    pub name: String,
    pub cuisine: String,
    pub location: String,
    pub rating: f64,
    #[serde(default)]
    pub menu: Menu,
}

/// Browsing filter. Every field that is set must match; an empty cuisine or
/// location filters nothing.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RestaurantQuery {
    pub cuisine: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<f64>,
}

impl RestaurantQuery {
    pub fn matches(&self, restaurant: &Restaurant) -> bool {
        Self::text_filter(&self.cuisine).is_none_or(|cuisine| restaurant.cuisine == cuisine)
            && Self::text_filter(&self.location)
                .is_none_or(|location| restaurant.location == location)
            && self
                .min_rating
                .is_none_or(|min_rating| restaurant.rating >= min_rating)
    }

    fn text_filter(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|v| !v.is_empty())
    }
}
