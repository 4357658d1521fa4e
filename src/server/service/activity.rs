//! Activity log sink.

use sea_orm::DatabaseConnection;

use crate::{
    model::activity::{Activity, RecordActivityDto},
    server::{
        data::activity::ActivityRepository,
        error::Error,
        util::{
            id::generate_id,
            time::{now, retention_cutoff},
        },
    },
};

/// Number of entries returned when the caller does not ask for a limit.
pub const DEFAULT_ACTIVITY_LIMIT: u64 = 100;

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    /// Creates a new instance of [`ActivityService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an activity entry.
    ///
    /// Failures are logged and swallowed; the activity log never fails the calling operation.
    ///
    /// # Returns
    /// - `Some(Activity)` - The stored entry
    /// - `None` - The entry could not be stored
    pub async fn record(&self, dto: RecordActivityDto) -> Option<Activity> {
        let activity = Activity {
            id: generate_id(),
            username: dto.username,
            action: dto.action,
            details: dto.details,
            project_id: dto.project_id.filter(|id| !id.is_empty()),
            timestamp: now(),
        };

        match ActivityRepository::new(self.db).create(&activity).await {
            Ok(model) => Some(model.into()),
            Err(e) => {
                tracing::warn!("Failed to record activity {:?}: {}", activity.action, e);
                None
            }
        }
    }

    /// Latest entries across all projects, newest first.
    pub async fn list(&self, limit: u64) -> Result<Vec<Activity>, Error> {
        let entries = ActivityRepository::new(self.db).list(None, limit).await?;

        Ok(entries.into_iter().map(Activity::from).collect())
    }

    /// Latest entries of one project, newest first.
    pub async fn list_for_project(
        &self,
        project_id: &str,
        limit: u64,
    ) -> Result<Vec<Activity>, Error> {
        let entries = ActivityRepository::new(self.db)
            .list(Some(project_id), limit)
            .await?;

        Ok(entries.into_iter().map(Activity::from).collect())
    }

    /// Deletes entries older than `days_old` days. Returns the number of deleted entries.
    pub async fn cleanup(&self, days_old: u32) -> Result<u64, Error> {
        let cutoff = retention_cutoff(now(), days_old)?;

        let result = ActivityRepository::new(self.db)
            .delete_before(cutoff)
            .await?;

        tracing::info!(
            "Removed {} activity entries older than {} days",
            result.rows_affected,
            days_old
        );

        Ok(result.rows_affected)
    }
}
