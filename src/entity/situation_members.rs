//! 情境成员实体，同一用户可以拥有多条不同角色的记录

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "situation_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub situation_id: i64,
    pub user_id: i64,
    pub role: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::situations::Entity",
        from = "Column::SituationId",
        to = "super::situations::Column::Id"
    )]
    Situation,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::situations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Situation.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn situation_role(&self) -> crate::models::situations::entities::SituationRole {
        use crate::models::situations::entities::SituationRole;
        self.role
            .parse::<SituationRole>()
            .unwrap_or(SituationRole::Unknown)
    }
}
