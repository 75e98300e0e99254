use serde::Serialize;
use ts_rs::TS;

use super::entities::{CertDecl, CertValid, CertificationItem, CertificationProgress};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertificationListResponse {
    pub planning_id: i64,
    pub student_id: i64,
    pub items: Vec<CertificationItem>,
    pub progress: CertificationProgress,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct DeclarationResponse {
    pub declaration: CertDecl,
    pub supervisors: Vec<i64>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct ValidationResponse {
    pub validation: CertValid,
}
