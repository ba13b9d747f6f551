use std::time::Instant;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tourapi::{AreaCode, ClientConfig, MobileOs, TourClient};

#[derive(Parser)]
#[command(name = "tourapi", about = "Normalized access to the Korea tour information API")]
struct Cli {
    /// Area to query (overrides TOURAPI_AREA_CODE)
    #[arg(short, long, global = true)]
    area: Option<AreaCode>,
    /// Client platform tag (overrides TOURAPI_MOBILE_OS)
    #[arg(long, global = true)]
    os: Option<MobileOs>,
    /// Application name sent upstream (overrides TOURAPI_MOBILE_APP)
    #[arg(long, global = true)]
    app: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tour in the area
    List {
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        /// Print canonical records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Common detail for one content id
    Common { content_id: i64 },
    /// Category-specific detail for one content id
    Intro { content_id: i64 },
    /// Image gallery for one content id
    Images { content_id: i64 },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(area) = cli.area {
        config.area_code = area;
    }
    if let Some(os) = cli.os {
        config.mobile_os = os;
    }
    if let Some(app) = cli.app {
        config.mobile_app = app;
    }
    let client = TourClient::from_config(&config)?;

    match cli.command {
        Commands::List { limit, json } => {
            let tours = client.list_tours()?;
            if tours.is_empty() {
                println!("No tours found.");
                return Ok(());
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&tours)?);
            } else {
                print_table(&tours, limit);
            }
        }
        Commands::Common { content_id } => {
            let record = client.detail_common(content_id)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Intro { content_id } => {
            let record = client.detail_intro(content_id)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Images { content_id } => match client.images(content_id)? {
            Some(images) => println!("{}", serde_json::to_string_pretty(&images)?),
            None => println!("No images."),
        },
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn print_table(tours: &[tourapi::CanonicalRecord], limit: usize) {
    println!(
        "{:>3} | {:>8} | {:>4} | {:<28} | {:<32} | {:>8}",
        "#", "Id", "Type", "Title", "Address", "Modified"
    );
    println!("{}", "-".repeat(98));

    for (i, t) in tours.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:>8} | {:>4} | {:<28} | {:<32} | {:>8}",
            i + 1,
            cell(t.get("content_id")),
            cell(t.get("content_type_id")),
            truncate(&cell(t.get("title")), 28),
            truncate(&cell(t.get("address")), 32),
            cell(t.get("modification_date")),
        );
    }

    println!("\n{} of {} tours", limit.min(tours.len()), tours.len());
}

fn cell(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".into(),
        Some(other) => other.to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
