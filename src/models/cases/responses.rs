use serde::Serialize;
use ts_rs::TS;

use super::entities::{CaseCategoryWithFields, CaseEntry};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseStructureResponse {
    pub situation_id: i64,
    pub categories: Vec<CaseCategoryWithFields>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseEntryListResponse {
    pub planning_id: i64,
    pub student_id: i64,
    pub items: Vec<CaseEntry>,
}
