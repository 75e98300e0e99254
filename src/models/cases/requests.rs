use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CaseDataValue, CaseFieldType};

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CreateCaseCategoryRequest {
    pub name: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CreateCaseFieldRequest {
    pub idnumber: String,
    pub name: String,
    pub field_type: CaseFieldType,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    pub sort_order: Option<i32>,
}

// 创建或更新病例记录；student_id 仅评估者代学生创建时需要
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseEntryRequest {
    pub student_id: Option<i64>,
    pub data: Vec<CaseDataValue>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseListParams {
    pub student_id: Option<i64>,
}
