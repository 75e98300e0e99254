//! 观察的查看与编辑权限

use crate::models::{
    observations::entities::{Observation, ObservationCategory},
    situations::entities::SituationRole,
};

/// 观察者与评估者可以查看计划内的全部观察，其他人只能看与自己相关的
pub fn can_view(observation: &Observation, user_id: i64, role: SituationRole) -> bool {
    role.is_supervisor() || observation.student_id == user_id || observation.observer_id == user_id
}

/// 自评只能由学生本人编辑；他评由观察者本人或评估者编辑
pub fn can_edit(observation: &Observation, user_id: i64, role: SituationRole) -> bool {
    match observation.category {
        ObservationCategory::Autoeval => observation.student_id == user_id,
        ObservationCategory::Eval => observation.observer_id == user_id || role.is_evaluator(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::observations::entities::ObservationStatus;

    fn observation(category: ObservationCategory, student_id: i64, observer_id: i64) -> Observation {
        let now = chrono::Utc::now();
        Observation {
            id: 1,
            planning_id: 1,
            student_id,
            observer_id,
            category,
            status: ObservationStatus::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_eval_edited_by_observer_or_evaluator() {
        let obs = observation(ObservationCategory::Eval, 1, 2);
        assert!(can_edit(&obs, 2, SituationRole::Observer));
        assert!(can_edit(&obs, 3, SituationRole::Evaluator));
        assert!(can_edit(&obs, 3, SituationRole::Admin));
        assert!(!can_edit(&obs, 3, SituationRole::Observer));
        assert!(!can_edit(&obs, 1, SituationRole::Student));
    }

    #[test]
    fn test_autoeval_edited_by_student_only() {
        let obs = observation(ObservationCategory::Autoeval, 1, 1);
        assert!(can_edit(&obs, 1, SituationRole::Student));
        assert!(!can_edit(&obs, 5, SituationRole::Evaluator));
        assert!(!can_edit(&obs, 5, SituationRole::Admin));
    }

    #[test]
    fn test_view_rules() {
        let obs = observation(ObservationCategory::Eval, 1, 2);
        assert!(can_view(&obs, 1, SituationRole::Student));
        assert!(can_view(&obs, 9, SituationRole::Observer));
        assert!(!can_view(&obs, 4, SituationRole::Student));
    }
}
