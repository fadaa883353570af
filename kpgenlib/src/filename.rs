//! Имя файла предложения: `<компания>_<YYYY-MM-DD>.<ext>`.

use crate::dates::format_iso;
use chrono::NaiveDate;

pub const MAX_BASE_CHARS: usize = 30;

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, 'А'..='Я' | 'а'..='я' | 'Ё' | 'ё')
}

/// Всё, кроме латиницы, кириллицы и цифр, превращается в `_`; серии `_`
/// схлопываются; результат обрезается до 30 символов.
pub fn sanitize_company_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_allowed(c) {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.chars().take(MAX_BASE_CHARS).collect()
}

pub fn suggested_filename(
    company_name: &str,
    date: NaiveDate,
    extension: &str,
    prefix: Option<&str>,
) -> String {
    let base = sanitize_company_name(company_name);
    let ext = extension.trim_start_matches('.');
    match prefix.filter(|p| !p.is_empty()) {
        Some(p) => format!("{p}_{base}_{}.{ext}", format_iso(date)),
        None => format!("{base}_{}.{ext}", format_iso(date)),
    }
}
