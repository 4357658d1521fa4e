use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{model::activity::Activity, server::model::db::ActivityModel};

pub struct ActivityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ActivityRepository<'a, C> {
    /// Creates a new instance of [`ActivityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, activity: &Activity) -> Result<ActivityModel, DbErr> {
        let activity = entity::activity_log::ActiveModel {
            id: ActiveValue::Set(activity.id.clone()),
            username: ActiveValue::Set(activity.username.clone()),
            action: ActiveValue::Set(activity.action.clone()),
            details: ActiveValue::Set(activity.details.clone()),
            project_id: ActiveValue::Set(activity.project_id.clone()),
            timestamp: ActiveValue::Set(activity.timestamp),
        };

        activity.insert(self.db).await
    }

    /// Latest `limit` entries, newest first, optionally restricted to one project
    pub async fn list(
        &self,
        project_id: Option<&str>,
        limit: u64,
    ) -> Result<Vec<ActivityModel>, DbErr> {
        let mut query = entity::prelude::ActivityLog::find();

        if let Some(project_id) = project_id {
            query = query.filter(entity::activity_log::Column::ProjectId.eq(project_id));
        }

        query
            .order_by_desc(entity::activity_log::Column::Timestamp)
            .order_by_desc(entity::activity_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Deletes entries recorded strictly before `cutoff`
    pub async fn delete_before(&self, cutoff: NaiveDateTime) -> Result<DeleteResult, DbErr> {
        entity::prelude::ActivityLog::delete_many()
            .filter(entity::activity_log::Column::Timestamp.lt(cutoff))
            .exec(self.db)
            .await
    }
}
