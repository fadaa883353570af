//! Доменные модели: позиции, реквизиты клиента, готовый документ.

use crate::money::{coerce_price, coerce_quantity, round_money, saturating_mul, Loose};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Одна позиция предложения: услуга или товар с ценой и количеством.
/// Десериализуется через [`RawLineItem`], так что цена и количество
/// нормализуются так же, как в формах.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawLineItem")]
pub struct LineItem {
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: quantity.max(1),
            id: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// `unit_price * quantity`, округлено до копеек; переполнение даёт `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        round_money(saturating_mul(self.unit_price, Decimal::from(self.quantity)))
    }

    pub fn category(&self) -> ServiceCategory {
        ServiceCategory::detect(self.id.as_deref(), &self.name)
    }
}

/// Позиция «как пришла» из формы или файла: цена и количество могут быть
/// строками, числами или отсутствовать.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawLineItem {
    pub name: String,
    #[serde(default, alias = "unit_price", alias = "unitPrice")]
    pub price: Option<Loose>,
    #[serde(default)]
    pub quantity: Option<Loose>,
    #[serde(default, alias = "serviceId")]
    pub id: Option<String>,
}

impl From<RawLineItem> for LineItem {
    fn from(raw: RawLineItem) -> Self {
        LineItem {
            unit_price: coerce_price(raw.price.as_ref()),
            quantity: coerce_quantity(raw.quantity.as_ref()),
            name: raw.name,
            id: raw.id.filter(|s| !s.is_empty()),
        }
    }
}

/// Реквизиты компании-получателя.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CompanyInfo {
    pub company_name: String,
    /// УНП
    #[serde(default)]
    pub unp: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
}

impl CompanyInfo {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Self::default()
        }
    }
}

/// Готовое предложение.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProposalDocument {
    pub html: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub grand_total: Decimal,
    pub grand_total_words: String,
    pub filename: String,
    pub issued_on: NaiveDate,
    pub valid_until: NaiveDate,
}

/// Раздел прайса, к которому относится услуга.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Verification,
    Installation,
    Commissioning,
    RemoteReading,
    Equipment,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 6] = [
        ServiceCategory::Verification,
        ServiceCategory::Installation,
        ServiceCategory::Commissioning,
        ServiceCategory::RemoteReading,
        ServiceCategory::Equipment,
        ServiceCategory::Other,
    ];

    /// Определение по идентификатору из каталога или по ключевым словам в названии.
    pub fn detect(id: Option<&str>, name: &str) -> Self {
        let id = id.unwrap_or("");
        let hit = |ids: &[&str], words: &[&str]| {
            ids.iter().any(|k| id.contains(k)) || words.iter().any(|w| name.contains(w))
        };

        if hit(&["verification"], &["Поверка"]) {
            ServiceCategory::Verification
        } else if hit(&["installation"], &["Монтаж"]) {
            ServiceCategory::Installation
        } else if hit(&["pnr"], &["Балансировка", "Запуск"]) {
            ServiceCategory::Commissioning
        } else if hit(&["remote"], &["Дистанционный", "обслуживание"]) {
            ServiceCategory::RemoteReading
        } else if hit(&["equipment"], &["Вега", "оборудование"]) {
            ServiceCategory::Equipment
        } else {
            ServiceCategory::Other
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceCategory::Verification => "Поверка приборов учета",
            ServiceCategory::Installation => "Монтаж счетчиков",
            ServiceCategory::Commissioning => "Пуско-наладочные работы",
            ServiceCategory::RemoteReading => "Дистанционный съем показаний",
            ServiceCategory::Equipment => "Продажа оборудования",
            ServiceCategory::Other => "Прочие услуги",
        }
    }
}
