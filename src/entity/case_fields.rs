//! 病例字段实体，下拉选项以 JSON 数组保存

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "case_fields")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub category_id: i64,
    pub idnumber: String,
    pub name: String,
    pub field_type: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub options: Option<String>,
    pub required: bool,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::case_cats::Entity",
        from = "Column::CategoryId",
        to = "super::case_cats::Column::Id"
    )]
    Category,
}

impl Related<super::case_cats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_field(self) -> crate::models::cases::entities::CaseField {
        use crate::models::cases::entities::{CaseField, CaseFieldType};

        CaseField {
            id: self.id,
            category_id: self.category_id,
            idnumber: self.idnumber,
            name: self.name,
            field_type: self
                .field_type
                .parse::<CaseFieldType>()
                .unwrap_or(CaseFieldType::Text),
            options: self
                .options
                .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
                .unwrap_or_default(),
            required: self.required,
            sort_order: self.sort_order,
        }
    }
}
