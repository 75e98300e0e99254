//! 病例记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "case_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
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
    #[sea_orm(has_many = "super::case_data::Entity")]
    Data,
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl Related<super::case_data::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Data.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_entry(
        self,
        data: Vec<super::case_data::Model>,
    ) -> crate::models::cases::entities::CaseEntry {
        crate::models::cases::entities::CaseEntry {
            id: self.id,
            student_id: self.student_id,
            planning_id: self.planning_id,
            data: data.into_iter().map(|d| d.into_value()).collect(),
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
