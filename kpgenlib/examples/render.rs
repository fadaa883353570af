use kpgenlib::{
    formats::csv::Csv,
    source::InlineTemplate,
    traits::ReadItems,
    CompanyInfo, ProposalDocumentBuilder,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: CSV с услугами из stdin -> HTML-предложение в stdout
    let items = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let template = InlineTemplate(
        "<html><body><p>Для: {{COMPANY_NAME}}, {{DATE}}</p>\n<p><strong>Итого:</strong> __________</p>\n</body></html>".into(),
    );
    let doc = ProposalDocumentBuilder::new(CompanyInfo::new("ООО Пример"), chrono::Local::now().date_naive())
        .items(items)
        .build_from(&template)?;
    println!("{}", doc.html);
    Ok(())
}
