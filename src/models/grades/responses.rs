use serde::Serialize;
use ts_rs::TS;

use super::entities::{Grade, SuggestedGrade};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeListResponse {
    pub planning_id: i64,
    pub student_id: i64,
    pub items: Vec<Grade>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct SuggestedGradeResponse {
    pub planning_id: i64,
    pub student_id: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub suggested: SuggestedGrade,
}
