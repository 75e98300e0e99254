use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生分组，计划按分组安排
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct Group {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct GroupMember {
    pub group_id: i64,
    pub user_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 带用户信息的分组成员
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct GroupMemberInfo {
    pub user_id: i64,
    pub username: String,
    pub profile_name: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
