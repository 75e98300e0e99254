use serde::Serialize;
use ts_rs::TS;

use crate::models::plannings::entities::Planning;
use crate::models::users::entities::UserSummary;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "search.ts")]
pub struct SearchResponse {
    pub situation_id: i64,
    pub students: Vec<UserSummary>,
    pub plannings: Vec<Planning>,
}
