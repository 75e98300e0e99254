use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserSummary;

/// 用户在实习情境中的角色
///
/// 只有 `Evaluator`、`Observer`、`Student` 会被写入成员表；
/// `Admin` 来自全局管理员身份，`Unknown` 表示不是情境成员。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "situation.ts")]
pub enum SituationRole {
    Admin,
    Evaluator,
    Observer,
    Student,
    Unknown,
}

impl SituationRole {
    /// 角色优先级，数值越大权限越高
    pub fn priority(&self) -> u8 {
        match self {
            SituationRole::Admin => 4,
            SituationRole::Evaluator => 3,
            SituationRole::Observer => 2,
            SituationRole::Student => 1,
            SituationRole::Unknown => 0,
        }
    }

    /// 取优先级最高的角色，空列表为 `Unknown`
    pub fn top_role<'a, I>(roles: I) -> SituationRole
    where
        I: IntoIterator<Item = &'a SituationRole>,
    {
        roles
            .into_iter()
            .copied()
            .max_by_key(SituationRole::priority)
            .unwrap_or(SituationRole::Unknown)
    }

    /// 能否写入成员表
    pub fn is_assignable(&self) -> bool {
        matches!(
            self,
            SituationRole::Evaluator | SituationRole::Observer | SituationRole::Student
        )
    }

    /// 观察者及以上（可以查看所有学生的数据）
    pub fn is_supervisor(&self) -> bool {
        self.priority() >= SituationRole::Observer.priority()
    }

    /// 评估者及以上（可以管理计划和成绩）
    pub fn is_evaluator(&self) -> bool {
        self.priority() >= SituationRole::Evaluator.priority()
    }
}

impl std::fmt::Display for SituationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SituationRole::Admin => "admin",
            SituationRole::Evaluator => "evaluator",
            SituationRole::Observer => "observer",
            SituationRole::Student => "student",
            SituationRole::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for SituationRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(SituationRole::Admin),
            "evaluator" => Ok(SituationRole::Evaluator),
            "observer" => Ok(SituationRole::Observer),
            "student" => Ok(SituationRole::Student),
            "unknown" => Ok(SituationRole::Unknown),
            _ => Err(format!("Invalid situation role: {s}")),
        }
    }
}

// 实习情境
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct Situation {
    pub id: i64,
    pub name: String,
    pub shortname: String,
    pub intro: Option<String>,
    pub eval_num: i32,
    pub autoeval_num: i32,
    pub cert_percent: i32,
    pub has_eval: bool,
    pub has_certif: bool,
    pub has_list: bool,
    pub eval_grid_id: Option<i64>,
    pub certif_grid_id: Option<i64>,
    pub list_grid_id: Option<i64>,
    pub grade_k1: i32,
    pub grade_k2: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 情境成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct SituationMember {
    pub user: UserSummary,
    pub role: SituationRole,
}

/// 新建情境时已补全默认值的设置
#[derive(Debug, Clone)]
pub struct NewSituation {
    pub name: String,
    pub shortname: String,
    pub intro: Option<String>,
    pub eval_num: i32,
    pub autoeval_num: i32,
    pub cert_percent: i32,
    pub has_eval: bool,
    pub has_certif: bool,
    pub has_list: bool,
    pub eval_grid_id: Option<i64>,
    pub certif_grid_id: Option<i64>,
    pub list_grid_id: Option<i64>,
    pub grade_k1: i32,
    pub grade_k2: i32,
}

impl NewSituation {
    /// 检查数值设置，返回第一条错误
    pub fn validate(&self) -> Result<(), String> {
        validate_settings(
            self.cert_percent,
            self.eval_num,
            self.autoeval_num,
            self.grade_k1,
            self.grade_k2,
        )
    }
}

impl Situation {
    pub fn validate(&self) -> Result<(), String> {
        validate_settings(
            self.cert_percent,
            self.eval_num,
            self.autoeval_num,
            self.grade_k1,
            self.grade_k2,
        )
    }
}

fn validate_settings(
    cert_percent: i32,
    eval_num: i32,
    autoeval_num: i32,
    k1: i32,
    k2: i32,
) -> Result<(), String> {
    if !(0..=100).contains(&cert_percent) {
        return Err(format!(
            "cert_percent must be between 0 and 100, got {cert_percent}"
        ));
    }
    if eval_num < 0 || autoeval_num < 0 {
        return Err("eval_num and autoeval_num must not be negative".to_string());
    }
    if k1 < 0 || k2 < 0 {
        return Err("grade_k1 and grade_k2 must not be negative".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_role_picks_highest_priority() {
        let roles = [
            SituationRole::Student,
            SituationRole::Evaluator,
            SituationRole::Observer,
        ];
        assert_eq!(SituationRole::top_role(&roles), SituationRole::Evaluator);
        assert_eq!(
            SituationRole::top_role(&[SituationRole::Student, SituationRole::Observer]),
            SituationRole::Observer
        );
    }

    #[test]
    fn test_top_role_of_nothing_is_unknown() {
        assert_eq!(SituationRole::top_role(&[]), SituationRole::Unknown);
    }

    #[test]
    fn test_priority_order() {
        assert!(SituationRole::Admin.priority() > SituationRole::Evaluator.priority());
        assert!(SituationRole::Evaluator.priority() > SituationRole::Observer.priority());
        assert!(SituationRole::Observer.priority() > SituationRole::Student.priority());
        assert!(SituationRole::Student.priority() > SituationRole::Unknown.priority());
    }

    #[test]
    fn test_assignable_roles() {
        assert!(SituationRole::Student.is_assignable());
        assert!(SituationRole::Observer.is_assignable());
        assert!(SituationRole::Evaluator.is_assignable());
        assert!(!SituationRole::Admin.is_assignable());
        assert!(!SituationRole::Unknown.is_assignable());
    }

    #[test]
    fn test_role_capabilities() {
        assert!(SituationRole::Observer.is_supervisor());
        assert!(!SituationRole::Observer.is_evaluator());
        assert!(SituationRole::Admin.is_evaluator());
        assert!(!SituationRole::Student.is_supervisor());
    }

    #[test]
    fn test_settings_validation() {
        assert!(validate_settings(80, 3, 1, 1, 1).is_ok());
        assert!(validate_settings(100, 0, 0, 0, 0).is_ok());
        assert!(validate_settings(101, 3, 1, 1, 1).is_err());
        assert!(validate_settings(-1, 3, 1, 1, 1).is_err());
        assert!(validate_settings(80, -1, 1, 1, 1).is_err());
        assert!(validate_settings(80, 3, 1, -2, 1).is_err());
    }
}
