use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 计划：某个分组在某个情境下的一段实习时间
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct Planning {
    pub id: i64,
    pub situation_id: i64,
    pub group_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
    pub session: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "planning.ts")]
pub struct PlanningPause {
    pub id: i64,
    pub planning_id: i64,
    pub start_time: chrono::DateTime<chrono::Utc>,
    pub end_time: chrono::DateTime<chrono::Utc>,
}

// 计划所处阶段
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "planning.ts")]
pub enum PlanningCategory {
    Current,
    Future,
    ObserverCompleted, // 已结束，所有学生都完成了所需评估
    ObserverLate,      // 已结束，仍有学生未完成
}
