//! Prints the calendar events a provider would see for a date range.

use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use slotkeeper_api::config::parse_log_level;
use slotkeeper_client::{config::ClientConfig, HttpBackend, SchedulePage};
use slotkeeper_core::{calendar::ViewMode, models::time_format::format_time};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Project a provider's schedule into calendar events
#[derive(Parser, Debug)]
#[command(name = "slotkeeper-calendar")]
#[command(version, about, long_about = None)]
struct Args {
    /// Date the view is centred on (defaults to today)
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Visible range: day, week or month
    #[arg(short, long, default_value = "week")]
    view: ViewMode,

    /// Backend base URL, overriding SLOTKEEPER_API_URL
    #[arg(long)]
    api_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let args = Args::parse();

    // Logs go to stderr so the event listing can be piped
    let log_level = parse_log_level(std::env::var("LOG_LEVEL").ok().as_deref());
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ClientConfig::from_lookup(|key| match key {
        "SLOTKEEPER_API_URL" => args.api_url.clone().or_else(|| std::env::var(key).ok()),
        _ => std::env::var(key).ok(),
    })?;
    let backend = HttpBackend::new(&config)?;

    let selected = args.date.unwrap_or_else(|| Local::now().date_naive());
    let mut page = SchedulePage::with_view_mode(backend, selected, args.view);
    if page.load_template().await.is_err() {
        warn!("Falling back to the built-in weekly schedule");
    }
    page.refresh().await?;

    let range = page.range();
    info!(
        "{} events between {} and {}",
        page.events().len(),
        range.date_from,
        range.date_to
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(page.events())?);
        return Ok(());
    }

    for event in page.events() {
        let mut line = format!(
            "{} {}-{} {}",
            event.date,
            format_time(event.start_time),
            format_time(event.end_time),
            event.title
        );
        if let Some(subtitle) = &event.subtitle {
            line.push_str(&format!(" ({})", subtitle));
        }
        if event.is_shadow() {
            line.push_str(" [booked]");
        }
        println!("{}", line);
    }

    Ok(())
}
