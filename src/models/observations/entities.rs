use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::impl_str_enum;

// 观察类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "observation.ts")]
pub enum ObservationCategory {
    Autoeval, // 学生自评
    Eval,     // 观察者评估
}

// 观察状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "observation.ts")]
pub enum ObservationStatus {
    NotStarted,
    InProgress,
    Completed,
    Archived,
}

// 评语类型，private 评语对被观察的学生不可见
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "observation.ts")]
pub enum CommentType {
    General,
    Private,
}


impl_str_enum!(ObservationCategory {
    Autoeval => "autoeval",
    Eval => "eval",
});

impl_str_enum!(ObservationStatus {
    NotStarted => "notstarted",
    InProgress => "inprogress",
    Completed => "completed",
    Archived => "archived",
});

impl_str_enum!(CommentType {
    General => "general",
    Private => "private",
});

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct Observation {
    pub id: i64,
    pub planning_id: i64,
    pub student_id: i64,
    pub observer_id: i64,
    pub category: ObservationCategory,
    pub status: ObservationStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 已保存的单项评分
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationCriterionValue {
    pub criterion_id: i64,
    pub level: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationComment {
    pub id: i64,
    pub user_id: i64,
    pub comment_type: CommentType,
    pub comment: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 评分表格中的一项及其已保存的值
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationCriterionEntry {
    pub criterion_id: i64,
    pub label: String,
    pub idnumber: String,
    pub level: Option<i32>,
    pub comment: Option<String>,
    pub options: Vec<ObservationCriterionEntry>,
}

/// 写入时使用的观察记录
#[derive(Debug, Clone)]
pub struct NewObservation {
    pub planning_id: i64,
    pub student_id: i64,
    pub observer_id: i64,
    pub category: ObservationCategory,
    pub status: ObservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_strings_match_serde() {
        for status in [
            ObservationStatus::NotStarted,
            ObservationStatus::InProgress,
            ObservationStatus::Completed,
            ObservationStatus::Archived,
        ] {
            let json = serde_json::to_string(&status).expect("serializable");
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<ObservationStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!("peer".parse::<ObservationCategory>().is_err());
        assert_eq!(
            "autoeval".parse::<ObservationCategory>(),
            Ok(ObservationCategory::Autoeval)
        );
    }
}
