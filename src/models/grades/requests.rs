use serde::Deserialize;
use ts_rs::TS;

use super::entities::GradeType;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct SetGradeRequest {
    pub student_id: i64,
    pub grade_type: GradeType,
    pub grade: i32,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeListParams {
    pub student_id: Option<i64>,
}
