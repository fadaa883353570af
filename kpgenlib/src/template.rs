//! Подстановка переменных в HTML-шаблон предложения.
//!
//! Шаблон содержит токены `{{DATE}}`, `{{VALID_UNTIL}}`, `{{COMPANY_NAME}}`,
//! `{{UNP}}`, `{{ADDRESS}}`, строку `<strong>Итого:</strong> __________` и
//! якорь `<div class="footer-info">`, перед которым встаёт таблица услуг.

use crate::render::{escape_html, total::Total};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const FOOTER_MARKER: &str = "<div class=\"footer-info\">";
pub const BODY_CLOSE: &str = "</body>";
pub const TOTAL_PLACEHOLDER: &str = "<strong>Итого:</strong> __________";
pub const TOTAL_PLACEHOLDER_BARE: &str = "Итого: __________";

static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("valid regex"));
static DOLLAR_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\s+").expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Date,
    ValidUntil,
    CompanyName,
    Unp,
    Address,
}

impl Token {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "DATE" => Some(Token::Date),
            "VALID_UNTIL" => Some(Token::ValidUntil),
            "COMPANY_NAME" => Some(Token::CompanyName),
            "UNP" => Some(Token::Unp),
            "ADDRESS" => Some(Token::Address),
            _ => None,
        }
    }
}

/// Значения токенов, уже отформатированные.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    pub date: String,
    pub valid_until: String,
    pub company_name: String,
    pub unp: String,
    pub address: String,
}

impl Variables {
    fn get(&self, token: Token) -> &str {
        match token {
            Token::Date => &self.date,
            Token::ValidUntil => &self.valid_until,
            Token::CompanyName => &self.company_name,
            Token::Unp => &self.unp,
            Token::Address => &self.address,
        }
    }
}

/// Убирает из шаблона `$` вместе с пробелами после него (остатки разметки
/// формул в исходных текстах шаблонов). Одиночный `$` перед текстом не трогается.
pub fn strip_dollar_markers(template: &str) -> String {
    DOLLAR_MARKER.replace_all(template, "").into_owned()
}

/// Заменяет известные токены за один проход; неизвестные остаются как есть,
/// подставленные значения повторно не сканируются.
pub fn substitute(template: &str, vars: &Variables) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures<'_>| match Token::from_name(&caps[1]) {
            Some(token) => escape_html(vars.get(token)).into_owned(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Вставляет таблицу перед подвалом, иначе перед `</body>`.
/// Если нет ни того, ни другого, документ возвращается без изменений.
pub fn insert_table(doc: &str, table: &str) -> String {
    if let Some(pos) = doc.find(FOOTER_MARKER) {
        let mut out = String::with_capacity(doc.len() + table.len() + 2);
        out.push_str(&doc[..pos]);
        out.push_str(table);
        out.push_str("\n\n");
        out.push_str(&doc[pos..]);
        out
    } else if let Some(pos) = doc.find(BODY_CLOSE) {
        let mut out = String::with_capacity(doc.len() + table.len() + 1);
        out.push_str(&doc[..pos]);
        out.push_str(table);
        out.push('\n');
        out.push_str(&doc[pos..]);
        out
    } else {
        tracing::warn!("template has neither footer marker nor </body>; services table skipped");
        doc.to_string()
    }
}

/// Заменяет все вхождения «Итого: __________» на сумму с прописью.
pub fn fill_total(doc: &str, total: &Total, currency: &str) -> String {
    let summary = escape_html(&total.summary(currency)).into_owned();
    doc.replace(TOTAL_PLACEHOLDER, &format!("<strong>Итого:</strong> {summary}"))
        .replace(TOTAL_PLACEHOLDER_BARE, &format!("Итого: {summary}"))
}
