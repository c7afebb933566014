use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use garmin_wellness::{
    Client, collect, date_window, date_window_ending_today, transform, write_raw_records,
};
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "wellness-cli",
    about = "Export Garmin Connect wellness metrics to CSV"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch two years of daily metrics into the raw dump
    Collect {
        /// Session token; falls back to GARMIN_SESSION_TOKEN env var
        #[arg(long, env = "GARMIN_SESSION_TOKEN")]
        token: String,
        /// Last day of the window YYYY-MM-DD; defaults to today
        #[arg(long, value_parser = parse_date)]
        end: Option<NaiveDate>,
        /// Raw dump file, overwritten on success
        #[arg(long, default_value = "hrv_dump.csv")]
        raw_file: PathBuf,
    },
    /// Flatten the raw dump into the analysis spreadsheet
    Transform {
        #[arg(long, default_value = "hrv_dump.csv")]
        raw_file: PathBuf,
        /// Output spreadsheet, overwritten on success
        #[arg(long, default_value = "sleep_data_for_analysis.csv")]
        output: PathBuf,
    },
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect {
            token,
            end,
            raw_file,
        } => {
            let client = Client::new(token)?;
            let window = match end {
                Some(end) => date_window(end),
                None => date_window_ending_today(),
            };
            println!(
                "Collecting {} days ({} to {})",
                window.len(),
                window[0],
                window[window.len() - 1]
            );
            let records = collect(&client, &window).await?;
            write_raw_records(&raw_file, &records)?;
            println!("Wrote {} records to {}", records.len(), raw_file.display());
        }
        Commands::Transform { raw_file, output } => {
            transform(&raw_file, &output)?;
            println!("Wrote analysis spreadsheet to {}", output.display());
        }
    }

    Ok(())
}
