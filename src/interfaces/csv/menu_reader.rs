use crate::domain::menu::{Menu, MenuEntry};
use crate::domain::money::Money;
use crate::error::{CheckoutError, Result};
use std::io::Read;
use tracing::warn;

/// Reads `name,price` menu entries from a CSV source.
pub struct MenuReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MenuReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn entries(self) -> impl Iterator<Item = Result<MenuEntry>> {
        self.reader.into_deserialize().map(|result| -> Result<MenuEntry> {
            let entry: MenuEntry = result.map_err(CheckoutError::from)?;
            Money::non_negative(entry.price.value())?;
            Ok(entry)
        })
    }

    /// Later rows overwrite earlier rows with the same name.
    pub fn into_menu(self) -> Menu {
        self.entries()
            .filter_map(|entry| {
                entry
                    .inspect_err(|e| warn!(error = %e, "skipping menu entry"))
                    .ok()
            })
            .collect()
    }
}
