use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Generic boolean answer for duplicate-name checks.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExistsDto {
    pub exists: bool,
}

/// Generic success acknowledgement for mutations without a response body.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}

/// Query for the `check-duplicate` endpoints.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DuplicateQuery {
    /// Name to look up, compared case-insensitively
    #[serde(default)]
    pub name: String,
    /// Record ignored by the lookup, used when renaming an existing record
    pub exclude_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LimitQuery {
    /// Maximum number of entries returned
    pub limit: Option<u64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CleanupQuery {
    /// Entries older than this many days are deleted, 30 when omitted
    pub days_old: Option<u32>,
}

/// Number of rows removed by a bulk delete.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeletedDto {
    pub deleted: u64,
}
