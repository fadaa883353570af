//! Два разных формата дат: короткий для реквизитов документа и
//! длинный для подписи «действительно до».

use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_VALIDITY_DAYS: u64 = 30;

const MONTHS_GENITIVE: [&str; 12] = [
    "января", "февраля", "марта", "апреля", "мая", "июня", "июля", "августа", "сентября",
    "октября", "ноября", "декабря",
];

/// `05.03.2024`
pub fn format_short(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// `5 марта 2024 г.`
pub fn format_long(date: NaiveDate) -> String {
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{} {} {} г.", date.day(), month, date.year())
}

/// `2024-03-05`, для имён файлов.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Дата окончания действия по умолчанию: дата выдачи + `days`.
pub fn valid_until_default(issued_on: NaiveDate, days: u64) -> NaiveDate {
    issued_on
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}
