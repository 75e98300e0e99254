//! 计划阶段划分

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::models::plannings::entities::PlanningCategory;

/// 计算计划所处阶段
///
/// 窗口两端都包含在 `current` 内。已结束的计划中，所有学生的已完成评估数都达到
/// `required` 时为 `observer_completed`，否则为 `observer_late`；没有学生时视为完成。
pub fn categorize(
    now: DateTime<Utc>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    students: &[i64],
    completed: &HashMap<i64, i64>,
    required: i64,
) -> PlanningCategory {
    if now < start {
        return PlanningCategory::Future;
    }
    if now <= end {
        return PlanningCategory::Current;
    }

    let all_done = students
        .iter()
        .all(|id| completed.get(id).copied().unwrap_or(0) >= required);
    if all_done {
        PlanningCategory::ObserverCompleted
    } else {
        PlanningCategory::ObserverLate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_current_ignores_counts() {
        let now = Utc::now();
        let category = categorize(
            now,
            now - Duration::hours(1),
            now + Duration::hours(1),
            &[1, 2],
            &HashMap::new(),
            3,
        );
        assert_eq!(category, PlanningCategory::Current);
    }

    #[test]
    fn test_window_bounds_are_current() {
        let now = Utc::now();
        assert_eq!(
            categorize(now, now, now + Duration::hours(1), &[], &HashMap::new(), 1),
            PlanningCategory::Current
        );
        assert_eq!(
            categorize(now, now - Duration::hours(1), now, &[], &HashMap::new(), 1),
            PlanningCategory::Current
        );
    }

    #[test]
    fn test_future() {
        let now = Utc::now();
        let category = categorize(
            now,
            now + Duration::days(1),
            now + Duration::days(2),
            &[1],
            &HashMap::new(),
            1,
        );
        assert_eq!(category, PlanningCategory::Future);
    }

    #[test]
    fn test_past_completed_or_late() {
        let now = Utc::now();
        let start = now - Duration::days(10);
        let end = now - Duration::days(3);
        let counts = HashMap::from([(1, 2), (2, 3)]);

        assert_eq!(
            categorize(now, start, end, &[1, 2], &counts, 2),
            PlanningCategory::ObserverCompleted
        );
        assert_eq!(
            categorize(now, start, end, &[1, 2], &counts, 3),
            PlanningCategory::ObserverLate
        );
        // 没有任何完成记录的学生
        assert_eq!(
            categorize(now, start, end, &[1, 2, 3], &counts, 1),
            PlanningCategory::ObserverLate
        );
    }

    #[test]
    fn test_past_without_students_is_completed() {
        let now = Utc::now();
        let category = categorize(
            now,
            now - Duration::days(2),
            now - Duration::days(1),
            &[],
            &HashMap::new(),
            5,
        );
        assert_eq!(category, PlanningCategory::ObserverCompleted);
    }
}
