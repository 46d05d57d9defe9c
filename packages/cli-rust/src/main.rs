//! `matprop`: query the reference tables from the command line.

mod output;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use matprop_core::{Catalog, CatalogConfig, TableKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "matprop",
    version,
    about = "Materials and propellant tables for solid rocket motor design"
)]
struct Cli {
    /// Directory holding the table resources. Defaults to the bundled tables.
    #[arg(long, env = "MATPROP_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Log filter applied when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show every table and the file it is read from.
    Tables,
    /// Print the keys of a table in file order.
    List { table: TableArg },
    /// Print one record.
    Get {
        table: TableArg,
        key: String,
        /// Emit pretty-printed JSON instead of `field = value` lines.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableArg {
    Materials,
    Composites,
    FlangeMaterials,
    Tzp,
    MixedPropellants,
    BallisticPropellants,
}

impl From<TableArg> for TableKind {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Materials => TableKind::StructuralMaterials,
            TableArg::Composites => TableKind::Composites,
            TableArg::FlangeMaterials => TableKind::FlangeFrameMaterials,
            TableArg::Tzp => TableKind::ThermalProtection,
            TableArg::MixedPropellants => TableKind::MixedPropellants,
            TableArg::BallisticPropellants => TableKind::BallisticPropellants,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.data_dir {
        Some(dir) => CatalogConfig::with_data_dir(dir),
        None => CatalogConfig::default(),
    };
    debug!(data_dir = %config.data_dir.display(), "opening catalog");
    let catalog = Catalog::new(&config);

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::Tables => output::write_tables(&mut out, &catalog)?,
        Command::List { table } => {
            for key in catalog.list_keys(table.into())? {
                writeln!(out, "{key}")?;
            }
        }
        Command::Get { table, key, json } => {
            output::write_record(&mut out, &catalog, table.into(), &key, json)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
