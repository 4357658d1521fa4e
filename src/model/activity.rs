use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub username: String,
    pub action: String,
    pub details: String,
    pub project_id: Option<String>,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordActivityDto {
    pub username: String,
    pub action: String,
    pub details: String,
    pub project_id: Option<String>,
}
