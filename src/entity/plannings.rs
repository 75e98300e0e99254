//! 实习安排实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "plannings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub situation_id: i64,
    pub group_id: i64,
    pub start_time: i64,
    pub end_time: i64,
    pub session: String,
    pub created_at: i64,
    pub updated_at: i64,
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
        belongs_to = "super::groups::Entity",
        from = "Column::GroupId",
        to = "super::groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::planning_pauses::Entity")]
    Pauses,
    #[sea_orm(has_many = "super::observations::Entity")]
    Observations,
}

impl Related<super::situations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Situation.def()
    }
}

impl Related<super::groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::planning_pauses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pauses.def()
    }
}

impl Related<super::observations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_planning(self) -> crate::models::plannings::entities::Planning {
        crate::models::plannings::entities::Planning {
            id: self.id,
            situation_id: self.situation_id,
            group_id: self.group_id,
            start_time: super::from_timestamp(self.start_time),
            end_time: super::from_timestamp(self.end_time),
            session: self.session,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
