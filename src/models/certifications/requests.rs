use serde::Deserialize;
use ts_rs::TS;

use super::entities::{CertDeclStatus, CertValidStatus};
use crate::utils::validate::validate_level;

// 学生声明某项能力；同一学生/计划/标准重复声明时覆盖原声明
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct DeclareCertificationRequest {
    pub criterion_id: i64,
    pub level: i32,
    pub comment: Option<String>,
    pub status: CertDeclStatus,
    #[serde(default)]
    pub supervisors: Vec<i64>,
}

impl DeclareCertificationRequest {
    pub fn validate(&self) -> Result<(), String> {
        validate_level(self.level).map_err(str::to_string)
    }
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct InviteSupervisorsRequest {
    pub supervisors: Vec<i64>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct ValidateCertificationRequest {
    pub status: CertValidStatus,
    pub comment: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertificationListParams {
    pub student_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_defaults_and_range() {
        let req: DeclareCertificationRequest =
            serde_json::from_str(r#"{"criterion_id":7,"level":60,"status":"seendone"}"#)
                .expect("valid");
        assert!(req.supervisors.is_empty());
        assert!(req.validate().is_ok());

        let bad: DeclareCertificationRequest =
            serde_json::from_str(r#"{"criterion_id":7,"level":-5,"status":"notseen"}"#)
                .expect("valid");
        assert!(bad.validate().is_err());
    }
}
