use mongodb::{options::ClientOptions, Client};
use sea_orm::DatabaseConnection;

use crate::{config::Config, error::Error};

/// Connect to the relational database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Connect to the document store and select the configured database
pub async fn connect_to_document_store(
    config: &Config,
) -> Result<(Client, mongodb::Database), Error> {
    use crate::error::document::DocumentError;

    let mut options = ClientOptions::parse(&config.mongodb_url)
        .await
        .map_err(DocumentError::from)?;
    options.app_name = Some("roster".to_string());

    let client = Client::with_options(options).map_err(DocumentError::from)?;
    let database = client.database(&config.mongodb_database);

    Ok((client, database))
}
