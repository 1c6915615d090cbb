use roster::{
    config::Config,
    data::document::MongoDocumentRepository,
    model::office::Office,
    notification::{log::LogHandler, payroll::OfficePayrollHandler, NotificationBus},
    startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = check(&config).await {
        tracing::error!("Startup check failed: {}", e);
        std::process::exit(1);
    }
}

/// Migrates the relational store and verifies the document store wiring, then exits.
///
/// The binary hosts no long-running service; commands are driven through the library.
async fn check(config: &Config) -> Result<(), roster::error::Error> {
    let db = startup::connect_to_database(config).await?;
    let (client, database) = startup::connect_to_document_store(config).await?;

    let offices = MongoDocumentRepository::<Office>::new(client, &database);
    let bus = NotificationBus::new()
        .subscribe(OfficePayrollHandler::new(offices))
        .subscribe(LogHandler);

    tracing::info!(
        "Startup check passed: relational store migrated, {} notification handlers wired",
        bus.len()
    );

    db.close().await?;

    Ok(())
}
