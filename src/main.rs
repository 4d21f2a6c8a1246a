//! Sharek boot check.
//!
//! Opens the local store, builds the application context and logs what it holds.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sharek::config::Config;
use sharek::db::SqliteStorage;
use sharek::screens;
use sharek::AppContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sharek");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Language: {}", config.language.as_str());

    let storage = SqliteStorage::open(&config.db_path).await?;
    let ctx = AppContext::new(storage, config);

    tracing::info!(
        "Catalog loaded with {} services at {} centers",
        ctx.catalog.services().len(),
        ctx.catalog.service_centers().len()
    );

    let appointments = ctx.appointments.get_appointments().await?;
    let upcoming = screens::upcoming_appointments(&ctx).await?;
    tracing::info!(
        "{} appointments stored, {} confirmed",
        appointments.len(),
        upcoming.len()
    );
    for appointment in &upcoming {
        tracing::info!(
            "  {} | {} | {} {} | {}",
            appointment.id,
            appointment.service,
            appointment.date,
            appointment.time,
            appointment.location
        );
    }

    let unread = screens::unread_count(&ctx).await?;
    tracing::info!("{} unread notifications", unread);

    Ok(())
}
