//! 观察详情：评分表格与已保存值的合并

use std::collections::HashMap;

use crate::models::{
    grids::entities::{Criterion, CriterionNode},
    observations::entities::{
        CommentType, ObservationComment, ObservationCriterionEntry, ObservationCriterionValue,
    },
};

fn entry(
    criterion: Criterion,
    values: &HashMap<i64, &ObservationCriterionValue>,
    options: Vec<ObservationCriterionEntry>,
) -> ObservationCriterionEntry {
    let value = values.get(&criterion.id);
    ObservationCriterionEntry {
        criterion_id: criterion.id,
        label: criterion.label,
        idnumber: criterion.idnumber,
        level: value.and_then(|v| v.level),
        comment: value.and_then(|v| v.comment.clone()),
        options,
    }
}

/// 按表格结构填入已保存的等级和评语，没有值的标准保持为空
pub fn merge_criteria(
    tree: Vec<CriterionNode>,
    values: &[ObservationCriterionValue],
) -> Vec<ObservationCriterionEntry> {
    let by_id: HashMap<i64, &ObservationCriterionValue> =
        values.iter().map(|v| (v.criterion_id, v)).collect();

    tree.into_iter()
        .map(|node| {
            let options = node
                .options
                .into_iter()
                .map(|option| entry(option, &by_id, Vec::new()))
                .collect();
            entry(node.criterion, &by_id, options)
        })
        .collect()
}

/// 被观察的学生看不到别人写的 private 评语
pub fn visible_comments(
    comments: Vec<ObservationComment>,
    viewer_id: i64,
    viewer_is_observed: bool,
) -> Vec<ObservationComment> {
    if !viewer_is_observed {
        return comments;
    }
    comments
        .into_iter()
        .filter(|c| c.comment_type != CommentType::Private || c.user_id == viewer_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grids::entities::build_criteria_tree;

    fn criterion(id: i64, parent_id: Option<i64>) -> Criterion {
        Criterion {
            id,
            grid_id: 1,
            parent_id,
            label: format!("Criterion {id}"),
            idnumber: format!("Q{id}"),
            sort_order: id as i32,
        }
    }

    fn comment(id: i64, user_id: i64, comment_type: CommentType) -> ObservationComment {
        ObservationComment {
            id,
            user_id,
            comment_type,
            comment: format!("comment {id}"),
            created_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_merge_fills_levels_on_roots_and_options() {
        let tree = build_criteria_tree(vec![
            criterion(1, None),
            criterion(2, Some(1)),
            criterion(3, None),
        ]);
        let values = vec![
            ObservationCriterionValue {
                criterion_id: 1,
                level: Some(80),
                comment: Some("good".to_string()),
            },
            ObservationCriterionValue {
                criterion_id: 2,
                level: Some(40),
                comment: None,
            },
            // 表格中不存在的标准被忽略
            ObservationCriterionValue {
                criterion_id: 99,
                level: Some(10),
                comment: None,
            },
        ];

        let merged = merge_criteria(tree, &values);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].level, Some(80));
        assert_eq!(merged[0].comment.as_deref(), Some("good"));
        assert_eq!(merged[0].options[0].level, Some(40));
        assert_eq!(merged[1].level, None);
        assert!(merged[1].options.is_empty());
    }

    #[test]
    fn test_private_comments_hidden_from_observed_student() {
        let comments = vec![
            comment(1, 2, CommentType::General),
            comment(2, 2, CommentType::Private),
            comment(3, 1, CommentType::Private),
        ];

        let student_view = visible_comments(comments.clone(), 1, true);
        let ids: Vec<i64> = student_view.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert_eq!(visible_comments(comments, 2, false).len(), 3);
    }
}
