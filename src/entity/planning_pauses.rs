//! 实习暂停时段实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "planning_pauses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub planning_id: i64,
    pub start_time: i64,
    pub end_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::plannings::Entity",
        from = "Column::PlanningId",
        to = "super::plannings::Column::Id"
    )]
    Planning,
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_pause(self) -> crate::models::plannings::entities::PlanningPause {
        crate::models::plannings::entities::PlanningPause {
            id: self.id,
            planning_id: self.planning_id,
            start_time: super::from_timestamp(self.start_time),
            end_time: super::from_timestamp(self.end_time),
        }
    }
}
