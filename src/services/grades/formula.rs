//! 建议总成绩

use crate::models::grades::entities::{GradeExplanation, SuggestedGrade};

/// 两个加权系数：K1 作用于评估成绩，K2 作用于清单成绩
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub k1: i32,
    pub k2: i32,
}

/// 已记录的子成绩，None 表示尚未给出
#[derive(Debug, Clone, Copy, Default)]
pub struct SubGrades {
    pub eval: Option<i32>,
    pub certif: Option<i32>,
    pub list: Option<i32>,
}

/// 情境启用的子成绩
#[derive(Debug, Clone, Copy)]
pub struct EnabledGrades {
    pub eval: bool,
    pub certif: bool,
    pub list: bool,
}

/// 未启用的子成绩按 1 参与计算；启用但缺失时无法给出建议
fn pick(enabled: bool, value: Option<i32>) -> Option<i64> {
    if enabled {
        value.map(i64::from)
    } else {
        Some(1)
    }
}

/// `round(((K1 * eval + K2 * list) * certif) / (K1 + K2))`
pub fn suggest(weights: Weights, grades: SubGrades, enabled: EnabledGrades) -> SuggestedGrade {
    if !enabled.eval && !enabled.certif && !enabled.list {
        return SuggestedGrade::not_enough();
    }

    let (Some(eval), Some(certif), Some(list)) = (
        pick(enabled.eval, grades.eval),
        pick(enabled.certif, grades.certif),
        pick(enabled.list, grades.list),
    ) else {
        return SuggestedGrade::not_enough();
    };

    let (k1, k2) = (i64::from(weights.k1), i64::from(weights.k2));
    if k1 + k2 == 0 {
        return SuggestedGrade::not_enough();
    }

    let value = ((k1 * eval + k2 * list) * certif) as f64 / (k1 + k2) as f64;
    SuggestedGrade {
        grade: value.round() as i32,
        explanation: GradeExplanation::Formula,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: EnabledGrades = EnabledGrades {
        eval: true,
        certif: true,
        list: true,
    };

    fn grades(eval: Option<i32>, certif: Option<i32>, list: Option<i32>) -> SubGrades {
        SubGrades { eval, certif, list }
    }

    #[test]
    fn test_weighted_average() {
        let s = suggest(
            Weights { k1: 1, k2: 1 },
            grades(Some(80), Some(1), Some(60)),
            ALL,
        );
        assert_eq!(s.grade, 70);
        assert_eq!(s.explanation, GradeExplanation::Formula);
    }

    #[test]
    fn test_failed_certification_zeroes_grade() {
        let enabled = EnabledGrades {
            list: false,
            ..ALL
        };
        let s = suggest(Weights { k1: 2, k2: 0 }, grades(Some(50), Some(0), None), enabled);
        assert_eq!(s.grade, 0);
        assert_eq!(s.explanation, GradeExplanation::Formula);
    }

    #[test]
    fn test_all_disabled() {
        let none = EnabledGrades {
            eval: false,
            certif: false,
            list: false,
        };
        let s = suggest(Weights { k1: 1, k2: 1 }, grades(Some(90), Some(1), Some(90)), none);
        assert_eq!(s, SuggestedGrade::not_enough());
    }

    #[test]
    fn test_only_certification_enabled() {
        let only_certif = EnabledGrades {
            eval: false,
            certif: true,
            list: false,
        };
        let passed = suggest(Weights { k1: 3, k2: 1 }, grades(None, Some(1), None), only_certif);
        assert_eq!(passed.grade, 1);
        let failed = suggest(Weights { k1: 3, k2: 1 }, grades(None, Some(0), None), only_certif);
        assert_eq!(failed.grade, 0);
        assert_eq!(failed.explanation, GradeExplanation::Formula);
    }

    #[test]
    fn test_zero_weights() {
        let s = suggest(
            Weights { k1: 0, k2: 0 },
            grades(Some(80), Some(1), Some(60)),
            ALL,
        );
        assert_eq!(s, SuggestedGrade::not_enough());
    }

    #[test]
    fn test_missing_enabled_grade() {
        let s = suggest(Weights { k1: 1, k2: 1 }, grades(Some(80), None, Some(60)), ALL);
        assert_eq!(s, SuggestedGrade::not_enough());
    }

    #[test]
    fn test_rounding() {
        // (2*75 + 1*80) / 3 = 76.67
        let s = suggest(
            Weights { k1: 2, k2: 1 },
            grades(Some(75), Some(1), Some(80)),
            ALL,
        );
        assert_eq!(s.grade, 77);
        // (1*81 + 1*80) / 2 = 80.5
        let s = suggest(
            Weights { k1: 1, k2: 1 },
            grades(Some(81), Some(1), Some(80)),
            ALL,
        );
        assert_eq!(s.grade, 81);
    }
}
