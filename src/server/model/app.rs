use sea_orm::DatabaseConnection;

use crate::server::codec::ExternalCodec;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub codec: ExternalCodec,
}

/// State without codec executables, used where only the stores are needed.
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            codec: ExternalCodec::default(),
        }
    }
}

impl From<(DatabaseConnection, ExternalCodec)> for AppState {
    fn from((db, codec): (DatabaseConnection, ExternalCodec)) -> Self {
        Self { db, codec }
    }
}
