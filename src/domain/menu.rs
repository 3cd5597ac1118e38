use super::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct MenuEntry {
    pub name: String,
    pub price: Money,
}

/// The purchasable items of one restaurant, keyed by exact name.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: BTreeMap<String, Money>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name`, overwriting any previous price.
    pub fn add_menu_item(&mut self, name: impl Into<String>, price: Money) {
        self.items.insert(name.into(), price);
    }

    /// Case-sensitive membership test.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn price_of(&self, name: &str) -> Option<Money> {
        self.items.get(name).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = MenuEntry> + '_ {
        self.items.iter().map(|(name, price)| MenuEntry {
            name: name.clone(),
            price: *price,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<MenuEntry> for Menu {
    fn from_iter<T: IntoIterator<Item = MenuEntry>>(iter: T) -> Self {
        let mut menu = Menu::new();
        for entry in iter {
            menu.add_menu_item(entry.name, entry.price);
        }
        menu
    }
}
