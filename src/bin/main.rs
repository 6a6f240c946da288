//! ods2sql CLI - Extract SQL from instrumented .ods spreadsheets
//!
//! Usage:
//!   ods2sql [OPTIONS] <FILE>
//!
//! Examples:
//!   ods2sql data.ods > data.sql
//!   ods2sql data.ods --dialect postgres --transaction --primary-key id
//!   ods2sql data.ods --dialect mysql --index "last_name+first_name"
//!   ods2sql data.ods --list --json
//!
//! SQL goes to stdout, one statement per line; warnings and errors go to stderr.

use clap::{ArgAction, Parser, ValueEnum};
use ods2sql::{
    convert_workbook, read_workbook, summarize_workbook, Conversion, Dialect, Settings, TableSummary,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "ODS2SQL_LOG";

/// Exit code for document, configuration and schema errors.
const EXIT_ERROR: u8 = 2;

#[derive(Parser)]
#[command(name = "ods2sql")]
#[command(about = "Extract SQL from instrumented .ods spreadsheets")]
#[command(version)]
struct Cli {
    /// Path to the .ods file
    file: PathBuf,

    /// SQL dialect for quoting & booleans [default: sqlite]
    #[arg(long, value_enum)]
    dialect: Option<DialectArg>,

    /// Use IF NOT EXISTS in CREATE TABLE/INDEX (where supported)
    #[arg(long)]
    if_not_exists: bool,

    /// Do not emit DROP TABLE IF EXISTS
    #[arg(long)]
    no_drop: bool,

    /// Emit only DDL (tables and indexes)
    #[arg(long, conflicts_with = "data_only")]
    schema_only: bool,

    /// Emit only INSERT statements
    #[arg(long)]
    data_only: bool,

    /// Rows per INSERT statement (0/1 for one row per INSERT) [default: 500]
    #[arg(long, value_name = "N")]
    batch: Option<usize>,

    /// Only export tables with this name (may repeat)
    #[arg(long = "table", value_name = "NAME")]
    tables: Vec<String>,

    /// List detected tables & columns to stderr and exit
    #[arg(long)]
    list: bool,

    /// With --list: print the table summary as JSON on stdout
    #[arg(long, requires = "list")]
    json: bool,

    /// Wrap output in a single transaction (SQLite/Postgres)
    #[arg(long)]
    transaction: bool,

    /// Do not create any indexes
    #[arg(long)]
    no_indices: bool,

    /// Comma-separated list of columns to index (defaults to all non-PK columns)
    #[arg(long, value_name = "COLUMNS")]
    index_columns: Option<String>,

    /// Define a composite index, columns separated by + (e.g. "col1+col2"). May repeat.
    #[arg(long = "index", value_name = "SPEC")]
    indexes: Vec<String>,

    /// Comma-separated column name(s) for a PRIMARY KEY
    #[arg(long, value_name = "COLUMNS")]
    primary_key: Option<String>,

    /// Config file (defaults to ./ods2sql.toml, then the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase verbosity (stderr)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Sqlite,
    #[value(alias = "postgresql")]
    Postgres,
    Mysql,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Sqlite => Dialect::Sqlite,
            DialectArg::Postgres => Dialect::Postgres,
            DialectArg::Mysql => Dialect::MySql,
        }
    }
}

impl Cli {
    /// Overlay command-line flags on file settings.
    fn apply(&self, settings: &mut Settings) {
        if let Some(dialect) = self.dialect {
            settings.dialect = Dialect::from(dialect).name().to_string();
        }
        if self.if_not_exists {
            settings.if_not_exists = true;
        }
        if self.no_drop {
            settings.drop = false;
        }
        if self.schema_only {
            settings.schema_only = true;
            settings.data_only = false;
        }
        if self.data_only {
            settings.data_only = true;
            settings.schema_only = false;
        }
        if let Some(batch) = self.batch {
            settings.batch = batch;
        }
        if !self.tables.is_empty() {
            settings.tables = self.tables.clone();
        }
        if self.transaction {
            settings.transaction = true;
        }
        if self.no_indices {
            settings.indexes.enabled = false;
        }
        if let Some(columns) = &self.index_columns {
            settings.indexes.columns = vec![columns.clone()];
        }
        if !self.indexes.is_empty() {
            settings.indexes.composite = self.indexes.clone();
        }
        if let Some(pk) = &self.primary_key {
            settings.primary_key = vec![pk.clone()];
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(cli: &Cli) -> ods2sql::Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    cli.apply(&mut settings);
    let options = settings.to_options()?;

    let workbook = read_workbook(&cli.file)?;

    if cli.list {
        let summary = summarize_workbook(&workbook, &options)?;
        print_warnings(&summary);
        return cmd_list(&summary.tables, cli.json);
    }

    let conversion = convert_workbook(&workbook, &options)?;
    print_warnings(&conversion);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for stmt in &conversion.statements {
        writeln!(out, "{}", stmt)?;
    }
    out.flush()?;
    Ok(())
}

fn print_warnings(conversion: &Conversion) {
    for warning in &conversion.warnings {
        eprintln!("[WARN] {}", warning);
    }
}

fn cmd_list(tables: &[TableSummary], json: bool) -> ods2sql::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(tables).map_err(io::Error::from)?;
        let mut out = io::stdout().lock();
        writeln!(out, "{}", rendered)?;
        return Ok(());
    }

    for table in tables {
        let columns: Vec<String> = table
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.sql_type))
            .collect();
        eprintln!(
            "- {}  (sheet: {}) columns: {} rows: {}",
            table.name,
            table.sheet,
            columns.join(", "),
            table.rows
        );
    }
    Ok(())
}
