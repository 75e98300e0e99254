//! 病例字段取值

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "case_data")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub entry_id: i64,
    pub field_id: i64,
    #[sea_orm(column_type = "Text")]
    pub value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::case_entries::Entity",
        from = "Column::EntryId",
        to = "super::case_entries::Column::Id"
    )]
    Entry,
    #[sea_orm(
        belongs_to = "super::case_fields::Entity",
        from = "Column::FieldId",
        to = "super::case_fields::Column::Id"
    )]
    Field,
}

impl Related<super::case_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl Related<super::case_fields::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Field.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_value(self) -> crate::models::cases::entities::CaseDataValue {
        crate::models::cases::entities::CaseDataValue {
            field_id: self.field_id,
            value: self.value,
        }
    }
}
