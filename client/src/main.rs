//! Warehouse client entry point

use std::path::PathBuf;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use client::{
    ClientConfig, RealWarehouseGateway, WarehouseClient, render, shell,
};
use shared::{BaggageStatus, logging};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "warehouse-client")]
#[command(about = "Upload data, check insurance eligibility and view statistics of the data warehouse")]
struct Args {
    /// Warehouse service origin (default: $WAREHOUSE_API_BASE or http://localhost:8000)
    #[arg(long)]
    api_base: Option<String>,

    /// Per-request timeout in seconds, 0 for none (default: $WAREHOUSE_TIMEOUT_SECS or none)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a CSV file and process it
    Upload {
        /// CSV file to upload
        file: PathBuf,
    },
    /// Check whether a passenger is eligible for insurance
    Check {
        #[arg(long)]
        name: String,
        #[arg(long)]
        flight_id: String,
        /// Delivered, Lost or Damaged
        #[arg(long, default_value = "Delivered")]
        baggage: BaggageStatus,
        /// Flight date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
    },
    /// Show aggregate record counts
    Stats,
    /// Check the service is reachable
    Ping,
    /// Interactive shell (default)
    Shell,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));

    let config = ClientConfig::resolve(args.api_base, args.timeout_secs)
        .context("Invalid client configuration")?;
    logging::log_startup(&format!("warehouse client against {}", config.api_base));

    let gateway = RealWarehouseGateway::new(config)?;
    let client = WarehouseClient::new(gateway);

    match args.command.unwrap_or(Command::Shell) {
        Command::Upload { file } => {
            client
                .select_file_path(&file)
                .await
                .with_context(|| format!("Cannot read {}", file.display()))?;

            let status = client.submit_upload().await?;
            println!("{}", render::render_upload_status(&status));
            if !status.is_success() {
                bail!("upload of {} did not complete", file.display());
            }
        }
        Command::Check { name, flight_id, baggage, date } => {
            client
                .edit_form(|form| {
                    form.set_name(name);
                    form.set_flight_id(flight_id);
                    form.set_baggage(baggage);
                    form.set_date(date);
                })
                .await;

            let result = client.submit_query().await?;
            print!("{}", render::render_eligibility_result(&result));
        }
        Command::Stats => {
            let snapshot = client.refresh_statistics().await;
            print!("{}", render::render_statistics(snapshot.as_ref()));
            if snapshot.is_none() {
                bail!("statistics are unavailable");
            }
        }
        Command::Ping => {
            let health = client.ping().await?;
            println!("🩺 {} ({})", health.message, health.status);
        }
        Command::Shell => shell::run_shell(client).await?,
    }

    Ok(())
}
