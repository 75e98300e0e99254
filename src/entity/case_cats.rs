//! 病例分类实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "case_cats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub situation_id: i64,
    pub name: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::situations::Entity",
        from = "Column::SituationId",
        to = "super::situations::Column::Id"
    )]
    Situation,
    #[sea_orm(has_many = "super::case_fields::Entity")]
    Fields,
}

impl Related<super::situations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Situation.def()
    }
}

impl Related<super::case_fields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fields.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_category(self) -> crate::models::cases::entities::CaseCategory {
        crate::models::cases::entities::CaseCategory {
            id: self.id,
            situation_id: self.situation_id,
            name: self.name,
            sort_order: self.sort_order,
        }
    }
}
