//! 成绩实体，(student_id, planning_id, grade_type) 唯一

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "grades")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub planning_id: i64,
    pub grade_type: String,
    pub grade: i32,
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
}

impl Related<super::plannings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planning.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_grade(self) -> crate::models::grades::entities::Grade {
        use crate::models::grades::entities::{Grade, GradeType};

        Grade {
            id: self.id,
            student_id: self.student_id,
            planning_id: self.planning_id,
            grade_type: self
                .grade_type
                .parse::<GradeType>()
                .unwrap_or(GradeType::Eval),
            grade: self.grade,
            created_at: super::from_timestamp(self.created_at),
            updated_at: super::from_timestamp(self.updated_at),
        }
    }
}
