//! Встроенный макет предложения, когда HTML-шаблона нет.

use super::{
    escape_html,
    table::{render_grouped_tables, TableStyle},
    total::{render_total_line, Total},
};
use crate::{
    dates::{format_long, format_short},
    model::{CompanyInfo, LineItem},
};
use chrono::NaiveDate;
use std::fmt::Write as FmtWrite;

pub const TITLE: &str = "КОММЕРЧЕСКОЕ ПРЕДЛОЖЕНИЕ";
pub const DISCLAIMER: &str = "Данное коммерческое предложение не является публичной офертой.";

const STYLE: &str = "body { font-family: Arial, sans-serif; font-size: 12px; line-height: 1.6; color: #000; }
table { width: 100%; border-collapse: collapse; margin: 10px 0; }
th, td { border: 1px solid #333; padding: 8px; text-align: left; }
th { background: #f2f2f2; font-weight: bold; }
.total { text-align: right; font-size: 18px; }
.footer { color: #666; font-size: 10px; }
@media print { @page { size: A4; margin: 10mm; } }";

pub fn render_preview(
    items: &[LineItem],
    company: &CompanyInfo,
    issued_on: NaiveDate,
    total: &Total,
    style: TableStyle<'_>,
) -> String {
    let name = escape_html(&company.company_name);
    let mut s = String::new();

    let _ = writeln!(s, "<!DOCTYPE html>");
    let _ = writeln!(s, "<html lang=\"ru\">");
    let _ = writeln!(s, "<head>");
    let _ = writeln!(s, "<meta charset=\"UTF-8\">");
    let _ = writeln!(s, "<title>Коммерческое предложение - {name}</title>");
    let _ = writeln!(s, "<style>\n{STYLE}\n</style>");
    let _ = writeln!(s, "</head>");
    let _ = writeln!(s, "<body>");

    let _ = writeln!(s, "<h1>{TITLE}</h1>");
    let _ = writeln!(s, "<p><strong>Дата:</strong> {}</p>", format_short(issued_on));
    let _ = writeln!(s, "<p><strong>Для:</strong> {name}</p>");
    let _ = writeln!(
        s,
        "<p><strong>УНП:</strong> {}</p>",
        escape_html(company.unp.as_deref().unwrap_or(""))
    );
    let _ = writeln!(
        s,
        "<p><strong>Адрес:</strong> {}</p>",
        escape_html(company.address.as_deref().unwrap_or(""))
    );
    let _ = writeln!(s, "<hr>");

    let _ = writeln!(s, "<h2>Выбранные услуги</h2>");
    s.push_str(&render_grouped_tables(items, style));
    let _ = writeln!(s, "<hr>");
    s.push_str(&render_total_line(total, style.currency));

    // срок действия печатается, только если его указали явно
    if let Some(valid_until) = company.valid_until {
        let _ = writeln!(s, "<hr>");
        let _ = writeln!(
            s,
            "<p class=\"footer\">Предложение действительно до: {}</p>",
            format_long(valid_until)
        );
    }
    let _ = writeln!(s, "<p class=\"footer\" style=\"text-align: center;\">{DISCLAIMER}</p>");

    let _ = writeln!(s, "</body>");
    let _ = writeln!(s, "</html>");
    s
}
