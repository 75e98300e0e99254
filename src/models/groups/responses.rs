use super::entities::{Group, GroupMemberInfo};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct GroupListResponse {
    pub items: Vec<Group>,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "group.ts")]
pub struct GroupMemberListResponse {
    pub group_id: i64,
    pub items: Vec<GroupMemberInfo>,
}
