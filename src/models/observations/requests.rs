use serde::Deserialize;
use std::collections::HashSet;
use ts_rs::TS;

use super::entities::{CommentType, ObservationCategory, ObservationStatus};
use crate::utils::validate::validate_level;

// 创建观察
//
// 学生：autoeval 直接开始；eval 需指定 observer_id，生成待办等待观察者处理。
// 观察者/评估者：只能创建 eval，需指定 student_id，观察者为自己。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct CreateObservationRequest {
    pub category: ObservationCategory,
    pub student_id: Option<i64>,
    pub observer_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationCriterionInput {
    pub criterion_id: i64,
    pub level: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationCommentInput {
    pub comment_type: CommentType,
    pub comment: String,
}

// 编辑观察：提供的部分整体替换
#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct UpdateObservationRequest {
    pub criteria: Option<Vec<ObservationCriterionInput>>,
    pub comments: Option<Vec<ObservationCommentInput>>,
    pub status: Option<ObservationStatus>,
}

impl UpdateObservationRequest {
    /// 评分等级必须在 0..=100，同一标准只能出现一次
    pub fn validate_levels(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for item in self.criteria.iter().flatten() {
            if !seen.insert(item.criterion_id) {
                return Err(format!("Criterion {} is given twice", item.criterion_id));
            }
            if let Some(level) = item.level {
                validate_level(level)
                    .map_err(|e| format!("Criterion {}: {e}", item.criterion_id))?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "observation.ts")]
pub struct ObservationListParams {
    pub student_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_range() {
        let ok: UpdateObservationRequest = serde_json::from_str(
            r#"{"criteria":[{"criterion_id":1,"level":0},{"criterion_id":2,"level":100},{"criterion_id":3}]}"#,
        )
        .expect("valid");
        assert!(ok.validate_levels().is_ok());

        let bad: UpdateObservationRequest =
            serde_json::from_str(r#"{"criteria":[{"criterion_id":1,"level":101}]}"#)
                .expect("valid");
        assert!(bad.validate_levels().is_err());
    }

    #[test]
    fn test_duplicate_criterion_rejected() {
        let req: UpdateObservationRequest = serde_json::from_str(
            r#"{"criteria":[{"criterion_id":7,"level":20},{"criterion_id":7,"level":60}]}"#,
        )
        .expect("valid");
        let err = req.validate_levels().expect_err("duplicate criterion");
        assert!(err.contains("Criterion 7"));
    }

    #[test]
    fn test_status_only_update() {
        let req: UpdateObservationRequest =
            serde_json::from_str(r#"{"status":"completed"}"#).expect("valid");
        assert_eq!(req.status, Some(ObservationStatus::Completed));
        assert!(req.criteria.is_none());
    }
}
