use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct AddGroupMemberRequest {
    pub user_id: i64,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct GroupListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}
