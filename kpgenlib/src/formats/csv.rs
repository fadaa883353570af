//! CSV со списком услуг, заголовки:
//! name,price,quantity,id  (id и quantity необязательны)

use crate::{
    error::Result,
    model::{LineItem, RawLineItem},
    money::Loose,
};
use csv::{ReaderBuilder, Trim};
use std::io::BufRead;

#[derive(serde::Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default, alias = "unit_price")]
    price: Option<String>,
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

impl From<CsvRow> for RawLineItem {
    fn from(row: CsvRow) -> Self {
        RawLineItem {
            name: row.name,
            price: row.price.map(Loose::Text),
            quantity: row.quantity.map(Loose::Text),
            id: row.id,
        }
    }
}

pub struct Csv;

impl crate::traits::ReadItems for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<LineItem>> {
        let mut rdr = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(r);

        let mut items = Vec::new();
        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;
            if row.name.is_empty() {
                tracing::debug!("skipping csv row without name");
                continue;
            }
            items.push(LineItem::from(RawLineItem::from(row)));
        }
        Ok(items)
    }
}
