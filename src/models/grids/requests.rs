use serde::Deserialize;
use ts_rs::TS;

use super::entities::GridType;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct CreateGridRequest {
    pub name: String,
    pub grid_type: GridType,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct CreateCriterionRequest {
    /// 为空时创建根标准，否则创建该根标准下的子选项
    pub parent_id: Option<i64>,
    pub label: String,
    pub idnumber: String,
    pub sort_order: Option<i32>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct GridListParams {
    pub grid_type: Option<GridType>,
}
