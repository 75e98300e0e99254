use serde::Serialize;
use ts_rs::TS;

use super::entities::{Planning, PlanningCategory, PlanningPause};
use crate::models::certifications::entities::CertificationProgress;
use crate::models::users::entities::UserSummary;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct PlanningWithCategory {
    pub planning: Planning,
    pub group_name: String,
    pub category: PlanningCategory,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct PlanningListResponse {
    pub situation_id: i64,
    pub items: Vec<PlanningWithCategory>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct PauseListResponse {
    pub planning_id: i64,
    pub items: Vec<PlanningPause>,
}

// 单个学生在计划中的进度
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct StudentPlanningInfo {
    pub student: UserSummary,
    pub eval_done: i64,
    pub eval_required: i64,
    pub autoeval_done: i64,
    pub autoeval_required: i64,
    pub certification: CertificationProgress,
    pub cases_count: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct PlanningInfosResponse {
    pub planning: Planning,
    pub category: PlanningCategory,
    pub items: Vec<StudentPlanningInfo>,
}
