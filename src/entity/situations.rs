//! 实习情境实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "situations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub shortname: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub intro: Option<String>,
    pub eval_num: i32,
    pub autoeval_num: i32,
    pub cert_percent: i32,
    pub has_eval: bool,
    pub has_certif: bool,
    pub has_list: bool,
    pub eval_grid_id: Option<i64>,
    pub certif_grid_id: Option<i64>,
    pub list_grid_id: Option<i64>,
    pub grade_k1: i32,
    pub grade_k2: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::situation_members::Entity")]
    SituationMembers,
    #[sea_orm(has_many = "super::plannings::Entity")]
    Plannings,
    #[sea_orm(has_many = "super::case_cats::Entity")]
    CaseCats,
}

impl Related<super::situation_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SituationMembers.def()
    }
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plannings.def()
    }
}

impl Related<super::case_cats::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaseCats.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_situation(self) -> crate::models::situations::entities::Situation {
        crate::models::situations::entities::Situation {
            id: self.id,
            name: self.name,
            shortname: self.shortname,
            intro: self.intro,
            eval_num: self.eval_num,
            autoeval_num: self.autoeval_num,
            cert_percent: self.cert_percent,
            has_eval: self.has_eval,
            has_certif: self.has_certif,
            has_list: self.has_list,
            eval_grid_id: self.eval_grid_id,
            certif_grid_id: self.certif_grid_id,
            list_grid_id: self.list_grid_id,
            grade_k1: self.grade_k1,
            grade_k2: self.grade_k2,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
