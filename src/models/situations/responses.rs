use serde::Serialize;
use ts_rs::TS;

use super::entities::{Situation, SituationMember, SituationRole};

// 当前用户参与的情境及其最高角色
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct MySituation {
    pub situation: Situation,
    pub role: SituationRole,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct MySituationListResponse {
    pub items: Vec<MySituation>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct SituationMemberListResponse {
    pub situation_id: i64,
    pub items: Vec<SituationMember>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "situation.ts")]
pub struct SituationRoleResponse {
    pub situation_id: i64,
    pub role: SituationRole,
}
