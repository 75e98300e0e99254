//! 数据模型
//!
//! 每个业务模块分为 `entities`（业务实体）、`requests`（请求体/查询参数）、`responses`（响应体）。

pub mod auth;
pub mod cases;
pub mod certifications;
pub mod common;
pub mod grades;
pub mod grids;
pub mod groups;
pub mod observations;
pub mod plannings;
pub mod search;
pub mod situations;
pub mod todos;
pub mod users;

pub use common::{ApiResponse, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    Conflict = 1009,
    RateLimitExceeded = 1029,
    InternalServerError = 1500,

    // 认证
    AuthFailed = 2000,
    RegisterFailed = 2001,

    // 用户
    UserNotFound = 3000,
    UserNameInvalid = 3001,
    UserEmailInvalid = 3002,
    UserPasswordInvalid = 3003,
    UserNameAlreadyExists = 3004,
    UserEmailAlreadyExists = 3005,
    UserCreationFailed = 3006,
    UserUpdateFailed = 3007,

    // 分组
    GroupNotFound = 4000,
    GroupAlreadyExists = 4001,
    GroupMemberAlreadyExists = 4002,
    GroupMemberNotFound = 4003,

    // 实习情境
    SituationNotFound = 5000,
    SituationAlreadyExists = 5001,
    SituationPermissionDenied = 5002,
    SituationInvalidSettings = 5003,
    SituationMemberAlreadyExists = 5004,

    // 评分表格与标准
    GridNotFound = 6000,
    GridTypeMismatch = 6001,
    CriterionNotFound = 6002,
    CriterionInvalidParent = 6003,
    GridInUse = 6004,

    // 计划
    PlanningNotFound = 7000,
    PlanningInvalidWindow = 7001,
    PauseNotFound = 7002,

    // 观察
    ObservationNotFound = 8000,
    ObservationPermissionDenied = 8001,
    ObservationInvalid = 8002,

    // 认证（能力认证）
    CertificationNotFound = 9000,
    CertificationNotInvited = 9001,
    CertificationInvalid = 9002,

    // 病例
    CaseCategoryNotFound = 10000,
    CaseEntryNotFound = 10001,
    CaseFieldInvalid = 10002,
    CaseValueInvalid = 10003,

    // 成绩
    GradeInvalid = 11000,

    // 待办
    TodoNotFound = 12000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values_are_stable() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::PlanningNotFound as i32, 7000);
        assert_eq!(ErrorCode::TodoNotFound as i32, 12000);
    }

    #[test]
    fn test_error_response_envelope() {
        let resp = ApiResponse::error_empty(ErrorCode::GradeInvalid, "bad grade");
        let json = serde_json::to_value(&resp).expect("serializable");
        assert_eq!(json["code"], 11000);
        assert_eq!(json["message"], "bad grade");
        assert!(json.get("data").is_none());
        assert!(json.get("timestamp").is_some());
    }
}
