//! JSON-массив позиций в том виде, в каком их отдаёт корзина:
//! `[{"name": "Поверка", "price": "30", "quantity": 1, "id": "verification-1"}]`

use crate::{
    error::Result,
    model::{LineItem, RawLineItem},
};
use std::io::BufRead;

pub struct Json;

impl crate::traits::ReadItems for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<LineItem>> {
        let raw: Vec<RawLineItem> = serde_json::from_reader(r)?;
        Ok(raw.into_iter().map(LineItem::from).collect())
    }
}
