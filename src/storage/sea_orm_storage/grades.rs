//! 成绩存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{CompetVetError, Result};
use crate::models::grades::entities::{Grade, GradeType};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入子成绩，(学生, 计划, 类型) 已存在时覆盖
    pub async fn upsert_grade_impl(
        &self,
        planning_id: i64,
        student_id: i64,
        grade_type: GradeType,
        grade: i32,
    ) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let existing = Grades::find()
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::GradeType.eq(grade_type.to_string()))
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询成绩失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.grade = Set(grade);
                active.updated_at = Set(now);
                active.update(&self.db).await
            }
            None => {
                ActiveModel {
                    student_id: Set(student_id),
                    planning_id: Set(planning_id),
                    grade_type: Set(grade_type.to_string()),
                    grade: Set(grade),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&self.db)
                .await
            }
        }
        .map_err(|e| CompetVetError::database_operation(format!("保存成绩失败: {e}")))?;

        Ok(result.into_grade())
    }

    pub async fn list_grades_impl(&self, planning_id: i64, student_id: i64) -> Result<Vec<Grade>> {
        let result = Grades::find()
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::GradeType)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_grade()).collect())
    }
}
