//! 观察评估存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use super::todos::{TodoLink, complete_linked_todos, delete_linked_todos, insert_todo};
use crate::entity::observation_comments::{
    ActiveModel as CommentActiveModel, Column as CommentColumn, Entity as ObservationComments,
};
use crate::entity::observation_criteria::{
    ActiveModel as ValueActiveModel, Column as ValueColumn, Entity as ObservationCriteria,
};
use crate::entity::observations::{ActiveModel, Column, Entity as Observations};
use crate::errors::{CompetVetError, Result};
use crate::models::{
    observations::{
        entities::{
            NewObservation, Observation, ObservationCategory, ObservationComment,
            ObservationCriterionValue, ObservationStatus,
        },
        requests::UpdateObservationRequest,
    },
    todos::entities::{NewTodo, TodoAction},
};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建观察；学生请求观察时同时给观察者生成待办
    pub async fn create_observation_impl(
        &self,
        new: NewObservation,
        ask_observer: bool,
    ) -> Result<Observation> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            planning_id: Set(new.planning_id),
            student_id: Set(new.student_id),
            observer_id: Set(new.observer_id),
            category: Set(new.category.to_string()),
            status: Set(new.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建观察失败: {e}")))?;

        if ask_observer {
            insert_todo(
                &txn,
                NewTodo::ask_for_observation(
                    result.observer_id,
                    result.student_id,
                    result.planning_id,
                    result.id,
                ),
            )
            .await?;
        }

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_observation())
    }

    pub async fn get_observation_by_id_impl(
        &self,
        observation_id: i64,
    ) -> Result<Option<Observation>> {
        let result = Observations::find_by_id(observation_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察失败: {e}")))?;

        Ok(result.map(|m| m.into_observation()))
    }

    /// 读取观察的逐项等级和评语
    pub async fn get_observation_values_impl(
        &self,
        observation_id: i64,
    ) -> Result<(Vec<ObservationCriterionValue>, Vec<ObservationComment>)> {
        let values = ObservationCriteria::find()
            .filter(ValueColumn::ObservationId.eq(observation_id))
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察等级失败: {e}")))?;

        let comments = ObservationComments::find()
            .filter(CommentColumn::ObservationId.eq(observation_id))
            .order_by_asc(CommentColumn::CreatedAt)
            .order_by_asc(CommentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察评语失败: {e}")))?;

        Ok((
            values.into_iter().map(|m| m.into_value()).collect(),
            comments.into_iter().map(|m| m.into_comment()).collect(),
        ))
    }

    /// 编辑观察
    ///
    /// 提供 criteria 时整体替换逐项等级；提供 comments 时替换该作者写的评语。
    /// 状态变为 completed 时关闭观察者的待办。
    pub async fn update_observation_impl(
        &self,
        observation_id: i64,
        author_id: i64,
        update: UpdateObservationRequest,
    ) -> Result<Option<Observation>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Observations::find_by_id(observation_id)
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察失败: {e}")))?
        else {
            return Ok(None);
        };
        let now = chrono::Utc::now().timestamp();

        if let Some(criteria) = update.criteria {
            ObservationCriteria::delete_many()
                .filter(ValueColumn::ObservationId.eq(observation_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    CompetVetError::database_operation(format!("清除观察等级失败: {e}"))
                })?;

            for item in criteria {
                ValueActiveModel {
                    observation_id: Set(observation_id),
                    criterion_id: Set(item.criterion_id),
                    level: Set(item.level),
                    comment: Set(item.comment),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    CompetVetError::database_operation(format!("保存观察等级失败: {e}"))
                })?;
            }
        }

        if let Some(comments) = update.comments {
            ObservationComments::delete_many()
                .filter(CommentColumn::ObservationId.eq(observation_id))
                .filter(CommentColumn::UserId.eq(author_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    CompetVetError::database_operation(format!("清除观察评语失败: {e}"))
                })?;

            for item in comments {
                CommentActiveModel {
                    observation_id: Set(observation_id),
                    user_id: Set(author_id),
                    comment_type: Set(item.comment_type.to_string()),
                    comment: Set(item.comment),
                    created_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
                .map_err(|e| {
                    CompetVetError::database_operation(format!("保存观察评语失败: {e}"))
                })?;
            }
        }

        let completed = update.status == Some(ObservationStatus::Completed);
        let (planning_id, observer_id) = (existing.planning_id, existing.observer_id);

        let mut model: ActiveModel = existing.into();
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        model.updated_at = Set(now);
        let result = model
            .update(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新观察失败: {e}")))?;

        if completed {
            complete_linked_todos(
                &txn,
                TodoLink {
                    action: TodoAction::AskForObservation,
                    planning_id,
                    user_id: Some(observer_id),
                    key: "observation_id",
                    target_id: observation_id,
                },
            )
            .await?;
        }

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(result.into_observation()))
    }

    pub async fn list_planning_observations_impl(
        &self,
        planning_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<Observation>> {
        let mut select = Observations::find().filter(Column::PlanningId.eq(planning_id));
        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let result = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_observation()).collect())
    }

    /// 删除观察及其未完成的待办，等级与评语随外键级联删除
    pub async fn delete_observation_impl(&self, observation_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = Observations::find_by_id(observation_id)
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询观察失败: {e}")))?
        else {
            return Ok(false);
        };

        delete_linked_todos(
            &txn,
            TodoLink {
                action: TodoAction::AskForObservation,
                planning_id: existing.planning_id,
                user_id: Some(existing.observer_id),
                key: "observation_id",
                target_id: observation_id,
            },
        )
        .await?;

        let result = Observations::delete_by_id(observation_id)
            .exec(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除观察失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 按学生统计某类已完成观察的数量
    pub async fn count_completed_observations_impl(
        &self,
        planning_id: i64,
        category: ObservationCategory,
    ) -> Result<HashMap<i64, i64>> {
        let rows = Observations::find()
            .select_only()
            .column(Column::StudentId)
            .column_as(Expr::from(Func::count(Expr::col(Column::Id))), "completed")
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::Category.eq(category.to_string()))
            .filter(Column::Status.eq(ObservationStatus::Completed.to_string()))
            .group_by(Column::StudentId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("统计观察数量失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }
}
