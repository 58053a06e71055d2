mod cli;

use crate::cli::app::App;
use anyhow::Context;
use clap::Parser;
use roster::{ManagerConfig, Record, RecordDraft, RecordManager, RecordSchema, Validator};
use std::fs::File;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Terminal manager for student records")]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record shape: minimal or extended
    #[arg(long)]
    schema: Option<RecordSchema>,

    /// Rows per page; must be one of the configured options
    #[arg(long)]
    page_size: Option<usize>,

    /// Where to write logs (the terminal belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with a few sample students
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let mut config = match &cli.config {
        Some(path) => ManagerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ManagerConfig::default(),
    };
    if let Some(schema) = cli.schema {
        config = config.schema(schema);
    }
    if let Some(size) = cli.page_size {
        config = config.page_size(size);
    }

    let records = if cli.demo {
        demo_records(config.schema)?
    } else {
        Vec::new()
    };
    let manager = RecordManager::with_records(config, records)?;
    info!(schema = %manager.schema(), "roster started");

    let mut app = App::new(manager);
    app.run()
}

fn init_tracing(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("roster=info")),
        )
        .with_ansi(false)
        .with_writer(file)
        .init();
    Ok(())
}

fn demo_records(schema: RecordSchema) -> anyhow::Result<Vec<Record>> {
    let validator = Validator::new(schema);
    let rows = [
        ("Aarav Shah", "Rohan Shah", "9876543210", "19"),
        ("Maya Chen", "Wei Chen", "9123456780", "21"),
        ("Daniel Brooks", "Mark Brooks", "9988776655", "20"),
        ("Hana Sato", "Kenji Sato", "9012345678", "22"),
        ("Liam Ortiz", "Diego Ortiz", "9345678901", "19"),
        ("Anya Novak", "Pavel Novak", "9456789012", "23"),
        ("Omar Haddad", "Sami Haddad", "9567890123", "20"),
    ];

    rows.iter()
        .enumerate()
        .map(|(index, (name, father, mobile, age))| -> anyhow::Result<Record> {
            let draft = RecordDraft::new(*name, *age)
                .father_name(*father)
                .mobile(*mobile);
            let valid = validator.validate(&draft)?;
            Ok(Record::new(index as i64 + 1, valid))
        })
        .collect()
}
