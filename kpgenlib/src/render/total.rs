use crate::{
    model::LineItem,
    money::{format_money, round_money, saturating_sum},
    words::amount_in_words,
};
use rust_decimal::Decimal;

/// Итог предложения. Число и пропись считаются один раз из одной и той же
/// округлённой суммы.
#[derive(Debug, Clone, PartialEq)]
pub struct Total {
    pub amount: Decimal,
    pub words: String,
}

impl Total {
    pub fn of(items: &[LineItem]) -> Self {
        let amount = round_money(saturating_sum(items.iter().map(LineItem::line_total)));
        Self {
            words: amount_in_words(amount),
            amount,
        }
    }

    /// `130.00`
    pub fn formatted(&self) -> String {
        format_money(self.amount)
    }

    /// `130.00 BYN (сто тридцать рублей)` — подставляется вместо «Итого: ____».
    pub fn summary(&self, currency: &str) -> String {
        format!("{} {} ({})", self.formatted(), currency, self.words)
    }
}

/// Строка итога для встроенного макета.
pub fn render_total_line(total: &Total, currency: &str) -> String {
    format!(
        "<p class=\"total\"><strong>ИТОГО: {} {}</strong></p>\n<p class=\"total-words\">{}</p>\n",
        total.formatted(),
        currency,
        total.words
    )
}
