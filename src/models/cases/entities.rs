use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::impl_str_enum;

// 病例字段类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "case.ts")]
pub enum CaseFieldType {
    Text,
    Textarea,
    Date,
    Select,
    Checkbox,
}

impl_str_enum!(CaseFieldType {
    Text => "text",
    Textarea => "textarea",
    Date => "date",
    Select => "select",
    Checkbox => "checkbox",
});

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseCategory {
    pub id: i64,
    pub situation_id: i64,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseField {
    pub id: i64,
    pub category_id: i64,
    pub idnumber: String,
    pub name: String,
    pub field_type: CaseFieldType,
    pub options: Vec<String>,
    pub required: bool,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseDataValue {
    pub field_id: i64,
    pub value: String,
}

// 学生记录的一个病例
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseEntry {
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
    pub data: Vec<CaseDataValue>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 分类及其字段
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "case.ts")]
pub struct CaseCategoryWithFields {
    #[serde(flatten)]
    #[ts(flatten)]
    pub category: CaseCategory,
    pub fields: Vec<CaseField>,
}
