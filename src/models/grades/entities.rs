use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::impl_str_enum;

// 子成绩类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "grade.ts")]
pub enum GradeType {
    Eval,
    Certif,
    List,
}

impl_str_enum!(GradeType {
    Eval => "eval",
    Certif => "certif",
    List => "list",
});

impl GradeType {
    /// 检查成绩值是否在该类型允许的范围内
    pub fn accepts(&self, grade: i32) -> bool {
        match self {
            GradeType::Eval | GradeType::List => (0..=100).contains(&grade),
            GradeType::Certif => grade == 0 || grade == 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
    pub grade_type: GradeType,
    pub grade: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "grade.ts")]
pub enum GradeExplanation {
    Formula,
    NotEnoughGrades,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct SuggestedGrade {
    pub grade: i32,
    pub explanation: GradeExplanation,
}

impl SuggestedGrade {
    pub fn not_enough() -> Self {
        Self {
            grade: 0,
            explanation: GradeExplanation::NotEnoughGrades,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_ranges() {
        assert!(GradeType::Eval.accepts(0));
        assert!(GradeType::Eval.accepts(100));
        assert!(!GradeType::List.accepts(101));
        assert!(!GradeType::List.accepts(-1));
        assert!(GradeType::Certif.accepts(1));
        assert!(!GradeType::Certif.accepts(2));
    }

    #[test]
    fn test_explanation_serialization() {
        let json = serde_json::to_string(&SuggestedGrade::not_enough()).unwrap();
        assert_eq!(json, r#"{"grade":0,"explanation":"notenoughgrades"}"#);
        assert_eq!("certif".parse::<GradeType>().unwrap(), GradeType::Certif);
    }
}
