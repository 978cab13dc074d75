//! smsforge: convert transaction-notification exports into an Android
//! SMS backup file.

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use smsforge_backup::{Converter, analyze, validate_backup, write_backup};
use smsforge_core::parse_timezone;
use smsforge_ingest::TransactionExport;

#[derive(Parser, Debug)]
#[command(name = "smsforge", version, about = "Transaction CSV to SMS backup converter")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Survey an export without converting it
    Analyze {
        /// Transaction export to read
        #[arg(long, default_value = "transactions.csv")]
        csv: PathBuf,
    },
    /// Convert an export into an SMS backup document
    Convert {
        /// Transaction export to read
        #[arg(long, default_value = "transactions.csv")]
        csv: PathBuf,
        /// Where to write the backup XML
        #[arg(long, default_value = "upi_sms_backup.xml")]
        out: PathBuf,
        /// IANA timezone for date interpretation and readable timestamps
        #[arg(long, default_value = "Asia/Kolkata")]
        timezone: String,
    },
    /// Re-check an existing backup document
    Validate {
        /// Backup XML to check
        #[arg(long, default_value = "upi_sms_backup.xml")]
        xml: PathBuf,
    },
}

fn main() -> ExitCode {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Command::Analyze { csv } => {
            let export = TransactionExport::read(&csv)?;
            report::print_analysis(&analyze(&export));
            Ok(ExitCode::SUCCESS)
        }
        Command::Convert { csv, out, timezone } => {
            let tz = parse_timezone(&timezone)?;
            let export = TransactionExport::read(&csv)?;
            report::print_analysis(&analyze(&export));

            let (document, stats) = Converter::new(tz).run(&export.rows);
            write_backup(&document, &out)?;
            info!("wrote {} messages to {}", document.count(), out.display());

            let validation = validate_backup(&out, Some(stats.processed));
            report::print_conversion(&stats, &out);
            report::print_validation(&validation);
            report::print_epilogue(&out);

            // a failed validation is advisory: the file stays, the exit
            // status says it needs a look
            Ok(if validation.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Validate { xml } => {
            let validation = validate_backup(&xml, None);
            report::print_validation(&validation);
            Ok(if validation.is_valid() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
