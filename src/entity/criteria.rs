//! 评分条目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub grid_id: i64,
    pub parent_id: Option<i64>,
    pub label: String,
    pub idnumber: String,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::grids::Entity",
        from = "Column::GridId",
        to = "super::grids::Column::Id"
    )]
    Grid,
}

impl Related<super::grids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grid.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_criterion(self) -> crate::models::grids::entities::Criterion {
        crate::models::grids::entities::Criterion {
            id: self.id,
            grid_id: self.grid_id,
            parent_id: self.parent_id,
            label: self.label,
            idnumber: self.idnumber,
            sort_order: self.sort_order,
        }
    }
}
