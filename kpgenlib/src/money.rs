//! Денежная арифметика и «мягкий» разбор чисел из форм и файлов.
//!
//! Нечисловые значения не являются ошибкой: цена откатывается к 0,
//! количество — к 1.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Число в том виде, в котором его прислала форма: JSON-число или строка.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for Loose {
    fn from(s: &str) -> Self {
        Loose::Text(s.to_string())
    }
}

impl From<i64> for Loose {
    fn from(v: i64) -> Self {
        Loose::Integer(v)
    }
}

impl From<f64> for Loose {
    fn from(v: f64) -> Self {
        Loose::Float(v)
    }
}

// ведущий числовой префикс: "12.5 BYN" -> 12.5, "3,75" -> 3.75
static DECIMAL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?(?:\d+(?:[.,]\d*)?|[.,]\d+))").expect("valid regex"));
static INTEGER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid regex"));

/// Округление до копеек, половина — от нуля.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Произведение с насыщением: при переполнении `Decimal::MAX`.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        tracing::debug!(%a, %b, "amount overflow, saturated");
        Decimal::MAX
    })
}

/// Сумма с насыщением: при переполнении `Decimal::MAX`.
pub fn saturating_sum(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, |acc, a| {
        acc.checked_add(a).unwrap_or_else(|| {
            tracing::debug!(%acc, %a, "total overflow, saturated");
            Decimal::MAX
        })
    })
}

/// Ровно два знака после точки: `130` -> `"130.00"`.
pub fn format_money(amount: Decimal) -> String {
    let mut a = round_money(amount);
    a.rescale(2);
    a.to_string()
}

/// Цена за единицу; отсутствующее, нечисловое или отрицательное значение даёт 0.
pub fn coerce_price(raw: Option<&Loose>) -> Decimal {
    let parsed = match raw {
        Some(Loose::Integer(i)) => Some(Decimal::from(*i)),
        Some(Loose::Float(f)) => Decimal::from_f64(*f),
        Some(Loose::Text(s)) => parse_decimal_prefix(s),
        None => None,
    };
    match parsed {
        Some(p) if !p.is_sign_negative() => p,
        other => {
            tracing::debug!(?raw, ?other, "price fallback to 0");
            Decimal::ZERO
        }
    }
}

/// Количество; отсутствующее, нечисловое или неположительное значение даёт 1.
pub fn coerce_quantity(raw: Option<&Loose>) -> u32 {
    let parsed: Option<i64> = match raw {
        Some(Loose::Integer(i)) => Some(*i),
        Some(Loose::Float(f)) => f.trunc().to_i64(),
        Some(Loose::Text(s)) => INTEGER_PREFIX
            .captures(s)
            .and_then(|c| c[1].parse::<i64>().ok()),
        None => None,
    };
    match parsed {
        Some(q) if q > 0 => u32::try_from(q).unwrap_or(u32::MAX),
        other => {
            tracing::debug!(?raw, ?other, "quantity fallback to 1");
            1
        }
    }
}

fn parse_decimal_prefix(s: &str) -> Option<Decimal> {
    let caps = DECIMAL_PREFIX.captures(s)?;
    let mut num = caps[1].replace(',', ".");
    if num.ends_with('.') {
        num.pop();
    }
    if num.starts_with('.') {
        num.insert(0, '0');
    } else if num.starts_with("-.") || num.starts_with("+.") {
        num.insert(1, '0');
    }
    num.trim_start_matches('+').parse::<Decimal>().ok()
}
