use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::impl_str_enum;

// 学生声明的状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "certification.ts")]
pub enum CertDeclStatus {
    SeenDone, // 见过并完成
    NotSeen,  // 未遇到
}

// 督导的验证结论
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "certification.ts")]
pub enum CertValidStatus {
    Confirmed,
    ObserverNotSeen,
    LevelNotReached,
}

impl_str_enum!(CertDeclStatus {
    SeenDone => "seendone",
    NotSeen => "notseen",
});

impl_str_enum!(CertValidStatus {
    Confirmed => "confirmed",
    ObserverNotSeen => "observernotseen",
    LevelNotReached => "levelnotreached",
});

/// 单个标准的认证进度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "certification.ts")]
pub enum CertState {
    None,                // 尚未声明
    Declared,            // 已声明，未邀请督导
    SupervisorInvited,   // 已邀请督导，尚无回复
    SupervisorResponded, // 至少一位督导已回复
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertDecl {
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
    pub criterion_id: i64,
    pub level: i32,
    pub comment: Option<String>,
    pub status: CertDeclStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertValid {
    pub id: i64,
    pub declaration_id: i64,
    pub supervisor_id: i64,
    pub status: CertValidStatus,
    pub comment: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 某个学生在某个计划中的认证完成度
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertificationProgress {
    pub confirmed: i64,
    pub total: i64,
    pub cert_percent: i32,
    pub status_proposed: bool,
}

// 认证表格中的一项及其声明、督导与验证
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "certification.ts")]
pub struct CertificationItem {
    pub criterion_id: i64,
    pub label: String,
    pub idnumber: String,
    pub state: CertState,
    pub declaration: Option<CertDecl>,
    pub supervisors: Vec<i64>,
    pub validations: Vec<CertValid>,
}

/// 声明及其督导和验证记录，存储层按计划与学生批量读取
#[derive(Debug, Clone)]
pub struct DeclarationRecord {
    pub declaration: CertDecl,
    pub supervisors: Vec<i64>,
    pub validations: Vec<CertValid>,
}

/// 写入时使用的声明
#[derive(Debug, Clone)]
pub struct NewCertDecl {
    pub student_id: i64,
    pub planning_id: i64,
    pub criterion_id: i64,
    pub level: i32,
    pub comment: Option<String>,
    pub status: CertDeclStatus,
}
