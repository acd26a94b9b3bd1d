use rideshare_client::api::ApiClient;
use rideshare_client::app_config::AppConfig;
use rideshare_client::geo::fit_region;
use rideshare_client::session::{FileTokenStore, Session};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🚕 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let store = Arc::new(FileTokenStore::new(config.session().token_file()));
    let session = Arc::new(Session::restore(store).await);
    let client = ApiClient::new(&config, session.clone())?;

    let default_point = config.location().default_point();
    let region = fit_region(Some(&default_point), None, &config.map().viewport_defaults());
    info!(?region, "🗺️ Default map region");
    info!("💰 Tariff: {} per km, {} for 1 km", config.pricing().rate_per_km(), config.pricing().estimate_price(1.0));

    if !session.is_authenticated().await {
        info!("🔒 Not signed in");
        return Ok(());
    }

    let user = client.profile().await?;
    info!("👤 Signed in as {} ({})", user.full_name(), user.email);

    let rides = client.upcoming_rides().await?;
    info!("🚗 {} upcoming ride(s)", rides.len());
    for ride in rides {
        info!(ride_id = ride.id, "🚗 {} → {} at {}", ride.pickup_address, ride.destination_address, ride.departure_time);
    }

    Ok(())
}
