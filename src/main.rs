use crate::app_config::AppConfig;
use crate::payload_loader::load_payloads_from;
use odata_models::models::MODELS;
use tracing::{info, warn};

mod app_config;
mod payload_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.report().log_level()).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");
    info!("✅  Registered {} models", MODELS.known_discriminators().len());

    let summary = load_payloads_from(config.payloads().directory(), config.payloads().extension()).await?;

    for payload in summary.reports() {
        let report = payload.report();
        if report.is_equivalent() {
            info!("✅  '{}' ({}) survived the round trip", payload.file_name(), report.odata_type().unwrap_or("untyped"));
            continue;
        }

        warn!("❌ '{}' changed in {} places", payload.file_name(), report.differences().len());
        for difference in report.differences() {
            warn!("   {}", difference);
        }
    }

    let mismatches = summary.mismatches();
    let failures = summary.failures().len();
    if config.report().fail_on_mismatch() && (mismatches > 0 || failures > 0) {
        return Err(format!("{} payloads changed and {} could not be verified", mismatches, failures).into());
    }

    info!("🔥 {} verified {} payloads", env!("CARGO_PKG_NAME"), summary.reports().len());
    Ok(())
}
