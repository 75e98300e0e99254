use serde::Serialize;
use ts_rs::TS;

use super::entities::{CriterionNode, Grid};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct GridListResponse {
    pub items: Vec<Grid>,
}

// 评分表格及其标准树
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "grid.ts")]
pub struct GridDetail {
    pub grid: Grid,
    pub criteria: Vec<CriterionNode>,
}
