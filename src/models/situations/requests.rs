use serde::{Deserialize, Deserializer};
use ts_rs::TS;

use super::entities::{NewSituation, SituationRole};
use crate::config::GradingConfig;

// 创建实习情境，未提供的数值使用 grading 配置中的默认值
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct CreateSituationRequest {
    pub name: String,
    pub shortname: String,
    pub intro: Option<String>,
    pub eval_num: Option<i32>,
    pub autoeval_num: Option<i32>,
    pub cert_percent: Option<i32>,
    pub has_eval: Option<bool>,
    pub has_certif: Option<bool>,
    pub has_list: Option<bool>,
    pub eval_grid_id: Option<i64>,
    pub certif_grid_id: Option<i64>,
    pub list_grid_id: Option<i64>,
    pub grade_k1: Option<i32>,
    pub grade_k2: Option<i32>,
}

impl CreateSituationRequest {
    pub fn with_defaults(self, defaults: &GradingConfig) -> NewSituation {
        NewSituation {
            name: self.name.trim().to_string(),
            shortname: self.shortname.trim().to_string(),
            intro: self.intro,
            eval_num: self.eval_num.unwrap_or(defaults.default_eval_num),
            autoeval_num: self.autoeval_num.unwrap_or(defaults.default_autoeval_num),
            cert_percent: self.cert_percent.unwrap_or(defaults.default_cert_percent),
            has_eval: self.has_eval.unwrap_or(true),
            has_certif: self.has_certif.unwrap_or(true),
            has_list: self.has_list.unwrap_or(true),
            eval_grid_id: self.eval_grid_id,
            certif_grid_id: self.certif_grid_id,
            list_grid_id: self.list_grid_id,
            grade_k1: self.grade_k1.unwrap_or(defaults.default_k1),
            grade_k2: self.grade_k2.unwrap_or(defaults.default_k2),
        }
    }
}

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct UpdateSituationRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub intro: Option<Option<String>>,
    pub eval_num: Option<i32>,
    pub autoeval_num: Option<i32>,
    pub cert_percent: Option<i32>,
    pub has_eval: Option<bool>,
    pub has_certif: Option<bool>,
    pub has_list: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub eval_grid_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub certif_grid_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[ts(optional)]
    pub list_grid_id: Option<Option<i64>>,
    pub grade_k1: Option<i32>,
    pub grade_k2: Option<i32>,
}

// 缺省字段为 None（保持不变），显式 null 为 Some(None)（清空）
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct AddSituationMemberRequest {
    pub user_id: i64,
    pub role: SituationRole,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct SituationMemberParams {
    pub role: Option<SituationRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let req: UpdateSituationRequest =
            serde_json::from_str(r#"{"list_grid_id":null,"eval_grid_id":4}"#).expect("valid");
        assert_eq!(req.list_grid_id, Some(None));
        assert_eq!(req.eval_grid_id, Some(Some(4)));
        assert_eq!(req.certif_grid_id, None);
        assert_eq!(req.intro, None);
    }

    fn defaults() -> GradingConfig {
        GradingConfig {
            default_k1: 2,
            default_k2: 1,
            default_cert_percent: 75,
            default_eval_num: 4,
            default_autoeval_num: 2,
        }
    }

    #[test]
    fn test_missing_values_come_from_config() {
        let req: CreateSituationRequest =
            serde_json::from_str(r#"{"name":" Surgery ","shortname":"SURG"}"#).expect("valid");
        let new = req.with_defaults(&defaults());
        assert_eq!(new.name, "Surgery");
        assert_eq!(new.grade_k1, 2);
        assert_eq!(new.grade_k2, 1);
        assert_eq!(new.cert_percent, 75);
        assert_eq!(new.eval_num, 4);
        assert_eq!(new.autoeval_num, 2);
        assert!(new.has_eval && new.has_certif && new.has_list);
    }

    #[test]
    fn test_explicit_values_win() {
        let req: CreateSituationRequest = serde_json::from_str(
            r#"{"name":"A","shortname":"A","cert_percent":50,"has_list":false,"grade_k2":0}"#,
        )
        .expect("valid");
        let new = req.with_defaults(&defaults());
        assert_eq!(new.cert_percent, 50);
        assert!(!new.has_list);
        assert_eq!(new.grade_k2, 0);
    }
}
