//! 观察评估实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub planning_id: i64,
    pub student_id: i64,
    pub observer_id: i64,
    pub category: String,
    pub status: String,
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
    #[sea_orm(has_many = "super::observation_criteria::Entity")]
    Criteria,
    #[sea_orm(has_many = "super::observation_comments::Entity")]
    Comments,
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl Related<super::observation_criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criteria.def()
    }
}

impl Related<super::observation_comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_observation(self) -> crate::models::observations::entities::Observation {
        use crate::models::observations::entities::{
            Observation, ObservationCategory, ObservationStatus,
        };

        Observation {
            id: self.id,
            planning_id: self.planning_id,
            student_id: self.student_id,
            observer_id: self.observer_id,
            category: self
                .category
                .parse::<ObservationCategory>()
                .unwrap_or(ObservationCategory::Eval),
            status: self
                .status
                .parse::<ObservationStatus>()
                .unwrap_or(ObservationStatus::NotStarted),
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
