//! 观察评估的逐项等级

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observation_criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub observation_id: i64,
    pub criterion_id: i64,
    pub level: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::observations::Entity",
        from = "Column::ObservationId",
        to = "super::observations::Column::Id"
    )]
    Observation,
    #[sea_orm(
        belongs_to = "super::criteria::Entity",
        from = "Column::CriterionId",
        to = "super::criteria::Column::Id"
    )]
    Criterion,
}

impl Related<super::observations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observation.def()
    }
}

impl Related<super::criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criterion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_value(self) -> crate::models::observations::entities::ObservationCriterionValue {
        crate::models::observations::entities::ObservationCriterionValue {
            criterion_id: self.criterion_id,
            level: self.level,
            comment: self.comment,
        }
    }
}
