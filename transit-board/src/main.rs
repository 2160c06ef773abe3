//! CLI for the departure board: onboarding, favorites, and live departures.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use transit_board::board::unified_board;
use transit_board::display::{
    DEFAULT_DEPARTURES_LIMIT, format_countdown, mode_counts, select_for_display,
};
use transit_board::domain::{Station, mode_label};
use transit_board::huxley::{HuxleyClient, HuxleyConfig};
use transit_board::store::PreferencesStore;
use transit_board::tfl::{TflClient, TflConfig};

/// Seconds between refreshes in watch mode.
const AUTO_REFRESH_SECS: u64 = 60;

#[derive(Parser)]
#[command(name = "transit-board")]
#[command(about = "Live departures for your London stations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and store a TfL application key
    Setup {
        /// Key registered at api.tfl.gov.uk
        app_key: String,
    },
    /// Search for stations without saving anything
    Search {
        /// Station name, e.g. "Clapham Junction"
        query: String,
    },
    /// Add the best search match to your stations
    Add {
        /// Station name to search for
        query: String,
    },
    /// Remove a saved station by its identifier
    Remove {
        /// Identifier shown by `list`
        station_id: String,
    },
    /// List your saved stations
    List,
    /// Remove every saved station
    Clear,
    /// Show live departures for your saved stations
    Board {
        /// Rows per station; values above 5 switch off mode balancing
        #[arg(short, long, default_value_t = DEFAULT_DEPARTURES_LIMIT)]
        limit: usize,
        /// Refresh every 60 seconds until interrupted
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let store = PreferencesStore::open_default()?;

    match cli.command {
        Commands::Setup { app_key } => setup(&store, &app_key).await,
        Commands::Search { query } => search(&store, &query).await,
        Commands::Add { query } => add(&store, &query).await,
        Commands::Remove { station_id } => {
            let stations = store.remove_station(&station_id)?;
            println!("Removed. {} station(s) left.", stations.len());
            Ok(())
        }
        Commands::List => {
            let stations = store.stations()?;
            if stations.is_empty() {
                println!("No saved stations. Add one with `transit-board add <name>`.");
            }
            for station in stations {
                print_station(&station);
            }
            Ok(())
        }
        Commands::Clear => {
            store.clear_stations()?;
            println!("Removed all stations.");
            Ok(())
        }
        Commands::Board { limit, watch } => board(&store, limit, watch).await,
    }
}

/// Build the TfL client from the stored credential, with `TFL_APP_KEY` as
/// an environment override.
fn tfl_client(store: &PreferencesStore) -> Result<TflClient> {
    let key = std::env::var("TFL_APP_KEY")
        .ok()
        .or(store.api_key()?)
        .context("no TfL application key; run `transit-board setup <key>` first")?;

    Ok(TflClient::new(TflConfig::new(key))?)
}

async fn setup(store: &PreferencesStore, app_key: &str) -> Result<()> {
    let client = TflClient::new(TflConfig::new(app_key))?;
    if !client.validate_key().await {
        bail!("TfL rejected that key; check it at https://api.tfl.gov.uk/");
    }

    store.set_api_key(app_key)?;
    println!("Key saved.");
    Ok(())
}

async fn search(store: &PreferencesStore, query: &str) -> Result<()> {
    let client = tfl_client(store)?;
    let stations = client.search(query).await?;

    if stations.is_empty() {
        println!("No stations match {query:?}.");
    }
    for station in &stations {
        print_station(station);
    }
    Ok(())
}

async fn add(store: &PreferencesStore, query: &str) -> Result<()> {
    let client = tfl_client(store)?;
    let mut stations = client.search(query).await?;
    if stations.is_empty() {
        bail!("no stations match {query:?}");
    }

    let station = stations.remove(0);
    println!("Adding {} ({})", station.name, station.id);
    if !stations.is_empty() {
        println!(
            "  ({} other match(es); use `search` to see them)",
            stations.len()
        );
    }

    store.add_station(station)?;
    Ok(())
}

async fn board(store: &PreferencesStore, limit: usize, watch: bool) -> Result<()> {
    let stations = store.stations()?;
    if stations.is_empty() {
        bail!("no saved stations; run `transit-board add <name>` first");
    }

    let tfl = tfl_client(store)?;
    let huxley = HuxleyClient::new(HuxleyConfig::new())?;

    if watch {
        let mut ticker = tokio::time::interval(Duration::from_secs(AUTO_REFRESH_SECS));
        loop {
            ticker.tick().await;
            render_all(&tfl, &huxley, &stations, limit).await;
        }
    }

    render_all(&tfl, &huxley, &stations, limit).await;
    Ok(())
}

async fn render_all(tfl: &TflClient, huxley: &HuxleyClient, stations: &[Station], limit: usize) {
    println!();
    println!("Updated {}", Local::now().format("%H:%M:%S"));

    for station in stations {
        println!();
        println!("== {} ==", station.name);

        match unified_board(tfl, huxley, station).await {
            Ok(arrivals) if arrivals.is_empty() => println!("  no departures found"),
            Ok(arrivals) => {
                for arrival in select_for_display(&arrivals, limit) {
                    let countdown = format_countdown(arrival.time_to_station);
                    println!(
                        "  {:>8}  {:<26} {:<30} {}",
                        countdown.display,
                        arrival.line_name,
                        arrival.destination_name,
                        arrival.platform_name,
                    );
                }

                let tags: Vec<String> = mode_counts(&arrivals)
                    .into_iter()
                    .map(|(mode, n)| format!("{} ({n})", mode_label(&mode)))
                    .collect();
                println!("  [{}]", tags.join("  "));
            }
            // Primary-feed failures land here; watch mode retries on the
            // next tick, one-shot mode leaves the retry to the user
            Err(e) => println!("  failed to load departures: {e}"),
        }
    }
}

fn print_station(station: &Station) {
    let modes: Vec<&str> = station.modes.iter().map(|m| mode_label(m)).collect();
    println!("{}  {}  [{}]", station.id, station.name, modes.join(", "));
}
