use crate::domain::restaurant::Restaurant;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct RestaurantRow<'a> {
    name: &'a str,
    cuisine: &'a str,
    location: &'a str,
    rating: f64,
}

const HEADER: [&str; 4] = ["name", "cuisine", "location", "rating"];

/// Writes restaurant search results as `name,cuisine,location,rating`.
///
/// The header is written even when there are no results.
pub struct RestaurantWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RestaurantWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(sink),
        }
    }

    pub fn write_restaurants(&mut self, restaurants: &[Restaurant]) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for r in restaurants {
            self.writer.serialize(RestaurantRow {
                name: &r.name,
                cuisine: &r.cuisine,
                location: &r.location,
                rating: r.rating,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
