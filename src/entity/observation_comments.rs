//! 观察评估评语

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "observation_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub observation_id: i64,
    pub user_id: i64,
    pub comment_type: String,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::observations::Entity",
        from = "Column::ObservationId",
        to = "super::observations::Column::Id"
    )]
    Observation,
}

impl Related<super::observations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Observation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_comment(self) -> crate::models::observations::entities::ObservationComment {
        use crate::models::observations::entities::{CommentType, ObservationComment};

        ObservationComment {
            id: self.id,
            user_id: self.user_id,
            comment_type: self
                .comment_type
                .parse::<CommentType>()
                .unwrap_or(CommentType::General),
            comment: self.comment,
            created_at: super::from_timestamp(self.created_at),
        }
    }
}
