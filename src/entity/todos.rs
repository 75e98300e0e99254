//! 待办事项实体，data 为 JSON 文本

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub target_user_id: i64,
    pub planning_id: i64,
    pub action: String,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub data: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plannings::Entity",
        from = "Column::PlanningId",
        to = "super::plannings::Column::Id"
    )]
    Planning,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn data_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.data).unwrap_or(serde_json::Value::Null)
    }

    pub fn into_todo(self) -> crate::models::todos::entities::Todo {
        use crate::models::todos::entities::{Todo, TodoAction, TodoStatus};

        let data = self.data_json();
        Todo {
            id: self.id,
            user_id: self.user_id,
            target_user_id: self.target_user_id,
            planning_id: self.planning_id,
            action: self
                .action
                .parse::<TodoAction>()
                .unwrap_or(TodoAction::AskForObservation),
            status: self
                .status
                .parse::<TodoStatus>()
                .unwrap_or(TodoStatus::Pending),
            data,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
