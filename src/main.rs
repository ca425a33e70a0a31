use clap::Parser;
use leadatlas::geo::{CityCountryResolver, ResolverConfig, SnapshotStore, DEFAULT_DATASET_URL};
use std::sync::Arc;

/// Leadatlas v0.3 — city → country resolution for lead geo enrichment
///
/// Resolves free-text, multi-language city names (diacritics,
/// abbreviations, "City, Province" forms) to a country name, backed by
/// a 150k+ city reference dataset with curated overrides.
///
/// Examples:
///   leadatlas Izmir
///   leadatlas --city "Fethiye, Muğla"
///   leadatlas --city gaza --json
///   leadatlas --offline Ankara
///   leadatlas --serve --port 8080
#[derive(Parser)]
#[command(name = "leadatlas", version, about, long_about = None)]
struct Cli {
    /// City name (positional). Example: leadatlas Izmir
    #[arg(index = 1)]
    city_positional: Option<String>,

    /// City name (named). Example: --city "Fethiye, Muğla"
    #[arg(long)]
    city: Option<String>,

    /// Print the result as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// Offline mode: use only the local dataset snapshot.
    #[arg(long)]
    offline: bool,

    /// Override the reference dataset URL.
    #[arg(long)]
    dataset_url: Option<String>,

    /// Run the HTTP API server instead of a one-shot lookup.
    #[arg(long)]
    serve: bool,

    /// Server bind host.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server bind port.
    #[arg(long, default_value_t = 3090)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = ResolverConfig {
        dataset_url: cli
            .dataset_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DATASET_URL.to_string()),
        snapshot: Some(SnapshotStore::open()),
        offline: cli.offline,
    };
    let resolver = Arc::new(CityCountryResolver::new(config));

    if cli.serve {
        leadatlas::server::start(&cli.host, cli.port, resolver).await;
        return;
    }

    // ── One-shot lookup ─────────────────────────────────────────

    let city = match cli.city.as_deref().or(cli.city_positional.as_deref()) {
        Some(c) if !c.trim().is_empty() => c.trim().to_string(),
        _ => {
            eprintln!("Error: No city specified.");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  leadatlas Izmir");
            eprintln!("  leadatlas --city \"Fethiye, Muğla\"");
            eprintln!("  leadatlas --serve --port 8080");
            std::process::exit(1);
        }
    };

    let country = resolver.resolve(&city).await;

    if cli.json {
        let out = serde_json::json!({
            "city": city,
            "country": country,
            "ready": resolver.is_ready(),
        });
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        if country.is_none() {
            std::process::exit(1);
        }
        return;
    }

    match country {
        Some(country) => println!("{}", country),
        None => {
            if resolver.is_ready() {
                eprintln!("No country found for '{}'", city);
            } else {
                eprintln!("City dataset unavailable; could not resolve '{}'", city);
            }
            std::process::exit(1);
        }
    }
}
