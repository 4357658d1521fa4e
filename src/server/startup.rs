use sea_orm::DatabaseConnection;

use crate::server::{codec::ExternalCodec, config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the external codec from the configured executable paths
///
/// Missing executables are only reported here; requests that need them fail with a codec error.
pub async fn build_codec(config: &Config) -> ExternalCodec {
    let codec = ExternalCodec::new(
        config.generator_path.clone(),
        config.parser_path.clone(),
        config.codec_timeout,
    );

    let status = codec.check_executables().await;
    if !status.generator {
        tracing::warn!("BIN generator executable is not available, .bin generation is disabled");
    }
    if !status.parser {
        tracing::warn!("BIN parser executable is not available, .bin import is disabled");
    }

    codec
}
