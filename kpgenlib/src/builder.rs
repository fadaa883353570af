//! Сборка предложения: итог -> таблица -> подстановка -> документ.

use crate::{
    dates::{format_short, valid_until_default, DEFAULT_VALIDITY_DAYS},
    error::Result,
    filename::suggested_filename,
    model::{CompanyInfo, LineItem, ProposalDocument},
    render::{
        preview::render_preview,
        table::{render_services_table, TableStyle},
        total::Total,
    },
    template::{fill_total, insert_table, strip_dollar_markers, substitute, Variables},
    traits::TemplateSource,
};
use chrono::NaiveDate;

/// Настройки, общие для всех предложений одного сайта.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposalOptions {
    pub currency: String,
    pub unit: String,
    pub validity_days: u64,
    pub extension: String,
    pub filename_prefix: Option<String>,
}

impl Default for ProposalOptions {
    fn default() -> Self {
        Self {
            currency: "BYN".into(),
            unit: "шт".into(),
            validity_days: DEFAULT_VALIDITY_DAYS,
            extension: "html".into(),
            filename_prefix: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProposalDocumentBuilder {
    company: CompanyInfo,
    issued_on: NaiveDate,
    items: Vec<LineItem>,
    options: ProposalOptions,
}

impl ProposalDocumentBuilder {
    pub fn new(company: CompanyInfo, issued_on: NaiveDate) -> Self {
        Self {
            company,
            issued_on,
            items: Vec::new(),
            options: ProposalOptions::default(),
        }
    }

    pub fn item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = LineItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn options(mut self, options: ProposalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.items
    }

    /// Явно указанная дата или дата выдачи + срок действия.
    pub fn valid_until(&self) -> NaiveDate {
        self.company
            .valid_until
            .unwrap_or_else(|| valid_until_default(self.issued_on, self.options.validity_days))
    }

    pub fn total(&self) -> Total {
        Total::of(&self.items)
    }

    pub fn filename(&self) -> String {
        suggested_filename(
            &self.company.company_name,
            self.issued_on,
            &self.options.extension,
            self.options.filename_prefix.as_deref(),
        )
    }

    pub fn variables(&self) -> Variables {
        Variables {
            date: format_short(self.issued_on),
            valid_until: format_short(self.valid_until()),
            company_name: self.company.company_name.clone(),
            unp: self.company.unp.clone().unwrap_or_default(),
            address: self.company.address.clone().unwrap_or_default(),
        }
    }

    fn style(&self) -> TableStyle<'_> {
        TableStyle {
            unit: &self.options.unit,
            currency: &self.options.currency,
        }
    }

    /// Подставляет данные в готовый шаблон. Не падает ни на каких входных данных.
    pub fn build(&self, template: &str) -> ProposalDocument {
        let total = self.total();
        let table = render_services_table(&self.items, &total, self.style());

        let html = substitute(&strip_dollar_markers(template), &self.variables());
        // итог раньше таблицы: названия услуг не должны попасть под замену
        let html = fill_total(&html, &total, &self.options.currency);
        let html = insert_table(&html, &table);

        tracing::info!(
            items = self.items.len(),
            total = %total.formatted(),
            company = %self.company.company_name,
            "proposal rendered"
        );
        self.document(html, total)
    }

    /// Загружает шаблон и собирает документ; без шаблона документа нет.
    pub fn build_from<S: TemplateSource + ?Sized>(&self, source: &S) -> Result<ProposalDocument> {
        let template = source.load().map_err(|e| {
            tracing::error!(source = %source.describe(), error = %e, "template load failed");
            e
        })?;
        Ok(self.build(&template))
    }

    /// Встроенный макет без внешнего шаблона.
    pub fn build_preview(&self) -> ProposalDocument {
        let total = self.total();
        let html = render_preview(&self.items, &self.company, self.issued_on, &total, self.style());
        tracing::info!(items = self.items.len(), total = %total.formatted(), "preview rendered");
        self.document(html, total)
    }

    fn document(&self, html: String, total: Total) -> ProposalDocument {
        ProposalDocument {
            html,
            grand_total: total.amount,
            grand_total_words: total.words,
            filename: self.filename(),
            issued_on: self.issued_on,
            valid_until: self.valid_until(),
        }
    }
}
