//! 督导对认证声明的确认结果

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cert_valids")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub declaration_id: i64,
    pub supervisor_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cert_decls::Entity",
        from = "Column::DeclarationId",
        to = "super::cert_decls::Column::Id"
    )]
    Declaration,
}

impl Related<super::cert_decls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Declaration.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_valid(self) -> crate::models::certifications::entities::CertValid {
        use crate::models::certifications::entities::{CertValid, CertValidStatus};

        CertValid {
            id: self.id,
            declaration_id: self.declaration_id,
            supervisor_id: self.supervisor_id,
            status: self
                .status
                .parse::<CertValidStatus>()
                .unwrap_or(CertValidStatus::ObserverNotSeen),
            comment: self.comment,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
