use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct CreatePlanningRequest {
    pub group_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub session: String,
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct UpdatePlanningRequest {
    pub group_id: Option<i64>,
    pub start_time: Option<chrono::DateTime<chrono::Utc>>,
    pub end_time: Option<chrono::DateTime<chrono::Utc>>,
    pub session: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct CreatePauseRequest {
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}
