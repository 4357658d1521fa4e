//! Service layer for business logic and orchestration.
//!
//! Services validate input, coordinate the repositories in [`crate::server::data`] and own the
//! transaction boundaries of multi-step writes: equipment and satellite cascades, project
//! deletion, imports, and XML generation.

pub mod activity;
pub mod build;
pub mod equipment;
pub mod export;
pub mod import;
pub mod mapping;
pub mod project;
pub mod satellite;
pub mod selection;

use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr, IsolationLevel,
    TransactionTrait,
};

/// Opens a transaction for multi-query reads that must observe a single snapshot.
///
/// Postgres reads use repeatable read; SQLite transactions are already serialized.
pub(crate) async fn begin_read(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    match db.get_database_backend() {
        DbBackend::Postgres => {
            db.begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
        }
        _ => db.begin().await,
    }
}
