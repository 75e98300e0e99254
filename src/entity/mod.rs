//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间字段统一以 Unix 秒保存。

pub mod prelude;

pub mod case_cats;
pub mod case_data;
pub mod case_entries;
pub mod case_fields;
pub mod cert_decl_assos;
pub mod cert_decls;
pub mod cert_valids;
pub mod criteria;
pub mod grades;
pub mod grids;
pub mod group_members;
pub mod groups;
pub mod observation_comments;
pub mod observation_criteria;
pub mod observations;
pub mod planning_pauses;
pub mod plannings;
pub mod situation_members;
pub mod situations;
pub mod todos;
pub mod users;

use chrono::{DateTime, Utc};

/// Unix 秒转换为 UTC 时间，非法值回退为纪元时间
pub(crate) fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
