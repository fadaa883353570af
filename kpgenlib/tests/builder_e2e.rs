use chrono::NaiveDate;
use kpgenlib::{
    error::ProposalError,
    source::{FileTemplate, InlineTemplate},
    template::FOOTER_MARKER,
    CompanyInfo, LineItem, ProposalDocumentBuilder, ProposalOptions,
};
use rust_decimal::Decimal;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<body>
<p>Дата: {{DATE}}</p>
<p>Для: {{COMPANY_NAME}}, УНП {{UNP}}, {{ADDRESS}}</p>
<p><strong>Итого:</strong> __________</p>
<div class="footer-info">
<p>Действительно до {{VALID_UNTIL}}</p>
</div>
</body>
</html>
"#;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn company() -> CompanyInfo {
    CompanyInfo {
        company_name: "ООО Ромашка".into(),
        unp: Some("190000001".into()),
        address: Some("г. Минск, ул. Ленина, 1".into()),
        valid_until: None,
    }
}

fn builder() -> ProposalDocumentBuilder {
    ProposalDocumentBuilder::new(company(), date(2024, 3, 5))
        .item(LineItem::new("Монтаж счетчика", Decimal::from(50), 2))
        .item(LineItem::new("Поверка", Decimal::from(30), 1))
}

#[test]
fn end_to_end_document() {
    let doc = builder().build(TEMPLATE);

    assert_eq!(doc.grand_total, Decimal::from(130));
    assert_eq!(doc.grand_total_words, "сто тридцать рублей");
    assert_eq!(doc.filename, "ООО_Ромашка_2024-03-05.html");
    assert_eq!(doc.issued_on, date(2024, 3, 5));
    assert_eq!(doc.valid_until, date(2024, 4, 4));

    assert!(doc.html.contains("<p>Дата: 05.03.2024</p>"));
    assert!(doc.html.contains("Для: ООО Ромашка, УНП 190000001, г. Минск, ул. Ленина, 1"));
    assert!(doc.html.contains("Действительно до 04.04.2024"));
    assert!(doc
        .html
        .contains("<strong>Итого:</strong> 130.00 BYN (сто тридцать рублей)"));

    let table = doc.html.find("<table class=\"price-table\">").unwrap();
    let footer = doc.html.find(FOOTER_MARKER).unwrap();
    assert!(table < footer);
    assert!(doc.html.contains(">100.00<"));
    assert!(!doc.html.contains("{{"));
}

#[test]
fn explicit_valid_until_wins() {
    let mut c = company();
    c.valid_until = Some(date(2024, 12, 31));
    let doc = ProposalDocumentBuilder::new(c, date(2024, 3, 5)).build(TEMPLATE);
    assert!(doc.html.contains("Действительно до 31.12.2024"));
    assert_eq!(doc.valid_until, date(2024, 12, 31));
}

#[test]
fn empty_services_and_missing_fields() {
    let doc = ProposalDocumentBuilder::new(CompanyInfo::default(), date(2024, 3, 5)).build(TEMPLATE);
    assert!(doc.html.contains("<p>Услуги не выбраны</p>"));
    assert!(doc.html.contains("Для: , УНП , </p>"));
    assert_eq!(doc.grand_total, Decimal::ZERO);
    assert_eq!(doc.grand_total_words, "ноль");
    assert!(doc.html.contains("<strong>Итого:</strong> 0.00 BYN (ноль)"));
    assert_eq!(doc.filename, "_2024-03-05.html");
}

#[test]
fn options_change_currency_and_filename() {
    let options = ProposalOptions {
        currency: "RUB".into(),
        extension: "pdf".into(),
        filename_prefix: Some("Предложение".into()),
        validity_days: 10,
        ..ProposalOptions::default()
    };
    let doc = builder().options(options).build(TEMPLATE);
    assert!(doc.html.contains("130.00 RUB ("));
    assert!(doc.html.contains("<th>Цена, RUB</th>"));
    assert_eq!(doc.filename, "Предложение_ООО_Ромашка_2024-03-05.pdf");
    assert_eq!(doc.valid_until, date(2024, 3, 15));
}

#[test]
fn loads_template_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calculator-template.html");
    std::fs::write(&path, TEMPLATE).unwrap();

    let doc = builder().build_from(&FileTemplate::new(&path)).expect("build from file");
    assert_eq!(doc.grand_total, Decimal::from(130));
    assert!(doc.html.contains("05.03.2024"));

    let inline = builder().build_from(&InlineTemplate(TEMPLATE.into())).unwrap();
    assert_eq!(inline, doc);
}

#[test]
fn missing_template_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let err = builder()
        .build_from(&FileTemplate::new(dir.path().join("nope.html")))
        .unwrap_err();
    assert!(matches!(err, ProposalError::TemplateUnavailable { .. }));

    let err = builder().build_from(&FileTemplate::new("")).unwrap_err();
    assert!(matches!(err, ProposalError::TemplateUnavailable { .. }));
}

#[test]
fn builtin_preview() {
    let doc = builder().build_preview();
    assert!(doc.html.starts_with("<!DOCTYPE html>"));
    assert!(doc.html.contains("КОММЕРЧЕСКОЕ ПРЕДЛОЖЕНИЕ"));
    assert!(doc.html.contains("<strong>Дата:</strong> 05.03.2024"));
    assert!(doc.html.contains("<h3>Поверка приборов учета</h3>"));
    assert!(doc.html.contains("<h3>Монтаж счетчиков</h3>"));
    assert!(doc.html.contains("ИТОГО: 130.00 BYN"));
    assert!(doc.html.contains("сто тридцать рублей"));
    // без явного срока подвал со сроком не печатается
    assert!(!doc.html.contains("действительно до"));

    let mut c = company();
    c.valid_until = Some(date(2024, 3, 5));
    let doc = ProposalDocumentBuilder::new(c, date(2024, 3, 1)).build_preview();
    assert!(doc
        .html
        .contains("Предложение действительно до: 5 марта 2024 г."));
}

#[test]
fn overflowing_line_saturates_instead_of_panicking() {
    use kpgenlib::{formats::json::Json, traits::ReadItems};
    use std::io::Cursor;

    let items = Json::read(Cursor::new(
        r#"[{"name": "Огромная", "price": "50000000000000000000000000000", "quantity": 2},
            {"name": "Поверка", "price": "30"}]"#,
    ))
    .unwrap();
    let doc = ProposalDocumentBuilder::new(company(), date(2024, 3, 5))
        .items(items)
        .build("<body></body>");
    assert_eq!(doc.grand_total, Decimal::MAX);
    assert!(doc.grand_total_words.ends_with("рублей"));
    assert!(doc.html.contains("price-table"));
}

#[test]
fn dollar_markers_removed_before_substitution() {
    let doc = builder().build("<body><p>$ {{COMPANY_NAME}}</p><p>$$ x</p></body>");
    assert!(doc.html.contains("<p>ООО Ромашка</p>"));
    assert!(doc.html.contains("<p>$x</p>"));
}
