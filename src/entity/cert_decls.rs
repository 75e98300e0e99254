//! 能力认证声明实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cert_decls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
    pub criterion_id: i64,
    pub level: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
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
    #[sea_orm(has_many = "super::cert_decl_assos::Entity")]
    Assos,
    #[sea_orm(has_many = "super::cert_valids::Entity")]
    Valids,
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl Related<super::cert_decl_assos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assos.def()
    }
}

impl Related<super::cert_valids::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Valids.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_decl(self) -> crate::models::certifications::entities::CertDecl {
        use crate::models::certifications::entities::{CertDecl, CertDeclStatus};

        CertDecl {
            id: self.id,
            student_id: self.student_id,
            planning_id: self.planning_id,
            criterion_id: self.criterion_id,
            level: self.level,
            comment: self.comment,
            status: self
                .status
                .parse::<CertDeclStatus>()
                .unwrap_or(CertDeclStatus::NotSeen),
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
