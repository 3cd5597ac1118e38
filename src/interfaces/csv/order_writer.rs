use crate::domain::order::OrderRecord;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct OrderRow<'a> {
    order_id: &'a str,
    items: String,
    total: String,
    status: String,
    date: String,
}

impl<'a> From<&'a OrderRecord> for OrderRow<'a> {
    fn from(record: &'a OrderRecord) -> Self {
        let items = record
            .items
            .iter()
            .map(|item| format!("{} x{}", item.name, item.quantity))
            .collect::<Vec<_>>()
            .join(";");
        Self {
            order_id: &record.order_id,
            items,
            total: record.total.to_string(),
            status: record.status.to_string(),
            date: record.date.to_string(),
        }
    }
}

/// Writes order records as `order_id,items,total,status,date`.
///
/// Items are flattened into one `name xQTY;...` column.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_orders<'a>(&mut self, records: impl IntoIterator<Item = &'a OrderRecord>) -> Result<()> {
        for record in records {
            self.writer.serialize(OrderRow::from(record))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
