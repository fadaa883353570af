use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use kpgenlib::{
    error::{ProposalError, Result},
    formats::{csv::Csv, json::Json},
    model::CompanyInfo,
    source::FileTemplate,
    traits::ReadItems,
    ProposalDocumentBuilder, ProposalOptions,
};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ItemsFmt {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "kpgen", version, about = "Генерация коммерческого предложения")]
struct Cli {
    /// Файл со списком услуг (по умолчанию stdin)
    #[arg(short = 'i', long = "items")]
    items: Option<PathBuf>,

    /// Формат списка услуг
    #[arg(long = "items-format", value_enum, default_value = "csv")]
    items_format: ItemsFmt,

    /// HTML-шаблон предложения
    // KPGEN_TEMPLATE только задаёт значение по умолчанию; --preview его перекрывает
    #[arg(short = 't', long = "template", env = "KPGEN_TEMPLATE")]
    template: Option<PathBuf>,

    /// Встроенный макет вместо шаблона
    #[arg(long = "preview")]
    preview: bool,

    /// Название компании-получателя
    #[arg(long = "company", default_value = "")]
    company: String,

    /// УНП
    #[arg(long = "unp")]
    unp: Option<String>,

    /// Адрес
    #[arg(long = "address")]
    address: Option<String>,

    /// Действительно до (YYYY-MM-DD), по умолчанию дата + 30 дней
    #[arg(long = "valid-until")]
    valid_until: Option<NaiveDate>,

    /// Дата предложения (YYYY-MM-DD), по умолчанию сегодня
    #[arg(long = "date")]
    date: Option<NaiveDate>,

    /// Валюта в таблице и итоге
    #[arg(long = "currency", env = "KPGEN_CURRENCY", default_value = "BYN")]
    currency: String,

    /// Префикс имени файла, например «Предложение»
    #[arg(long = "filename-prefix")]
    filename_prefix: Option<String>,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output", conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Каталог, куда записать документ под предложенным именем
    #[arg(long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Напечатать только итог и сумму прописью
    #[arg(long = "summary")]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "arguments parsed");

    // reader
    let reader: Box<dyn io::Read> = match &cli.items {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let items = match cli.items_format {
        ItemsFmt::Csv => Csv::read(br),
        ItemsFmt::Json => Json::read(br),
    }?;

    let company = CompanyInfo {
        company_name: cli.company.clone(),
        unp: cli.unp.clone(),
        address: cli.address.clone(),
        valid_until: cli.valid_until,
    };
    let options = ProposalOptions {
        currency: cli.currency.clone(),
        filename_prefix: cli.filename_prefix.clone(),
        ..ProposalOptions::default()
    };
    let issued_on = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let builder = ProposalDocumentBuilder::new(company, issued_on)
        .items(items)
        .options(options);

    if cli.summary {
        let total = builder.total();
        let mut out = io::stdout();
        writeln!(out, "{} {}", total.formatted(), cli.currency)?;
        writeln!(out, "{}", total.words)?;
        return out.flush().map_err(ProposalError::from);
    }

    let doc = if cli.preview {
        builder.build_preview()
    } else {
        let path = cli.template.clone().ok_or_else(|| ProposalError::TemplateUnavailable {
            source_name: "--template".into(),
            reason: "no template given (use --template or --preview)".into(),
        })?;
        builder.build_from(&FileTemplate::new(path))?
    };

    // writer
    let mut writer: Box<dyn Write> = match (&cli.output, &cli.out_dir) {
        (Some(path), _) => Box::new(File::create(path)?),
        (None, Some(dir)) => {
            fs::create_dir_all(dir)?;
            let path = dir.join(&doc.filename);
            println!("{}", path.display());
            Box::new(File::create(path)?)
        }
        (None, None) => Box::new(io::stdout()),
    };

    writer.write_all(doc.html.as_bytes())?;
    writer.flush().map_err(ProposalError::from)
}
