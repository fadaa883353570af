//! Таблица услуг: №, наименование, ед. изм., кол-во, цена, сумма + строка ИТОГО.

use super::{escape_html, total::Total};
use crate::{model::LineItem, model::ServiceCategory, money::format_money};
use std::fmt::Write as FmtWrite;

pub const EMPTY_PLACEHOLDER: &str = "<p>Услуги не выбраны</p>";

/// Подписи, которые зависят от настроек предложения.
#[derive(Debug, Clone, Copy)]
pub struct TableStyle<'a> {
    pub unit: &'a str,
    pub currency: &'a str,
}

impl Default for TableStyle<'static> {
    fn default() -> Self {
        Self { unit: "шт", currency: "BYN" }
    }
}

/// Плоская таблица в порядке поступления позиций.
pub fn render_services_table(items: &[LineItem], total: &Total, style: TableStyle<'_>) -> String {
    if items.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut s = String::new();
    let _ = writeln!(s, "<table class=\"price-table\">");
    write_head(&mut s, style);
    let _ = writeln!(s, "<tbody>");
    for (idx, item) in items.iter().enumerate() {
        write_row(&mut s, idx + 1, item, style);
    }
    let _ = writeln!(
        s,
        "<tr class=\"total-row\"><td colspan=\"5\" style=\"text-align: right;\">ИТОГО:</td><td style=\"text-align: right;\">{}</td></tr>",
        total.formatted()
    );
    let _ = writeln!(s, "</tbody>");
    let _ = writeln!(s, "</table>");
    s
}

/// Таблицы по разделам прайса, с заголовком раздела; пустые разделы пропускаются.
/// Нумерация сквозная.
pub fn render_grouped_tables(items: &[LineItem], style: TableStyle<'_>) -> String {
    if items.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let mut s = String::new();
    let mut index = 0;
    for category in ServiceCategory::ALL {
        let group: Vec<&LineItem> = items.iter().filter(|i| i.category() == category).collect();
        if group.is_empty() {
            continue;
        }
        let _ = writeln!(s, "<h3>{}</h3>", category.title());
        let _ = writeln!(s, "<table class=\"price-table\">");
        write_head(&mut s, style);
        let _ = writeln!(s, "<tbody>");
        for item in group {
            index += 1;
            write_row(&mut s, index, item, style);
        }
        let _ = writeln!(s, "</tbody>");
        let _ = writeln!(s, "</table>");
    }
    s
}

fn write_head(s: &mut String, style: TableStyle<'_>) {
    let _ = writeln!(
        s,
        "<thead><tr><th>№</th><th>Наименование работ</th><th>Ед. изм.</th><th>Кол-во</th><th>Цена, {cur}</th><th>Сумма, {cur}</th></tr></thead>",
        cur = escape_html(style.currency)
    );
}

fn write_row(s: &mut String, index: usize, item: &LineItem, style: TableStyle<'_>) {
    let _ = writeln!(
        s,
        "<tr><td style=\"text-align: center;\">{}</td><td>{}</td><td style=\"text-align: center;\">{}</td><td style=\"text-align: center;\">{}</td><td style=\"text-align: right;\">{}</td><td style=\"text-align: right;\">{}</td></tr>",
        index,
        escape_html(&item.name),
        escape_html(style.unit),
        item.quantity,
        format_money(item.unit_price),
        format_money(item.line_total()),
    );
}
