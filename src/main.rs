//! iss-flyover - next ISS passes over the current location
//!
//! This is the composition root that wires together all the components.

use iss_flyover::adapters::inbound::console;
use iss_flyover::{build_flyover_service, load_config};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging; stdout is reserved for the report
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(
        "looking up ISS passes ip={} geo={} flyover={}",
        cfg.ip_lookup_url,
        cfg.geo_lookup_url,
        cfg.flyover_url
    );

    let service = build_flyover_service(&cfg)?;

    match service.next_passes_for_current_location().await {
        Ok(passes) => {
            console::print_pass_times(&passes)?;
            Ok(())
        }
        Err(e) => {
            println!("It didn't work: {}", e);
            std::process::exit(1);
        }
    }
}
