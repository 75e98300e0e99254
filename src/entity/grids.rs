//! 评分表格实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grids")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub grid_type: String,
    pub sort_order: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::criteria::Entity")]
    Criteria,
}

impl Related<super::criteria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Criteria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grid(self) -> crate::models::grids::entities::Grid {
        use crate::models::grids::entities::{Grid, GridType};

        Grid {
            id: self.id,
            name: self.name,
            grid_type: self.grid_type.parse::<GridType>().unwrap_or(GridType::Eval),
            sort_order: self.sort_order,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
