//! 实习安排与暂停时段存储操作

use super::SeaOrmStorage;
use crate::entity::planning_pauses::{
    ActiveModel as PauseActiveModel, Column as PauseColumn, Entity as PlanningPauses,
};
use crate::entity::plannings::{ActiveModel, Column, Entity as Plannings};
use crate::errors::{CompetVetError, Result};
use crate::models::plannings::{
    entities::{Planning, PlanningPause},
    requests::{CreatePauseRequest, CreatePlanningRequest, UpdatePlanningRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_planning_impl(
        &self,
        situation_id: i64,
        req: CreatePlanningRequest,
    ) -> Result<Planning> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            situation_id: Set(situation_id),
            group_id: Set(req.group_id),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            session: Set(req.session),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建实习安排失败: {e}")))?;

        Ok(result.into_planning())
    }

    pub async fn get_planning_by_id_impl(&self, planning_id: i64) -> Result<Option<Planning>> {
        let result = Plannings::find_by_id(planning_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询实习安排失败: {e}")))?;

        Ok(result.map(|m| m.into_planning()))
    }

    pub async fn list_situation_plannings_impl(
        &self,
        situation_id: i64,
        group_ids: Option<Vec<i64>>,
    ) -> Result<Vec<Planning>> {
        let mut select = Plannings::find().filter(Column::SituationId.eq(situation_id));
        if let Some(group_ids) = group_ids {
            if group_ids.is_empty() {
                return Ok(Vec::new());
            }
            select = select.filter(Column::GroupId.is_in(group_ids));
        }

        let result = select
            .order_by_asc(Column::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetVetError::database_operation(format!("查询实习安排列表失败: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_planning()).collect())
    }

    pub async fn update_planning_impl(
        &self,
        planning_id: i64,
        update: UpdatePlanningRequest,
    ) -> Result<Option<Planning>> {
        if self.get_planning_by_id_impl(planning_id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(planning_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(group_id) = update.group_id {
            model.group_id = Set(group_id);
        }
        if let Some(start_time) = update.start_time {
            model.start_time = Set(start_time.timestamp());
        }
        if let Some(end_time) = update.end_time {
            model.end_time = Set(end_time.timestamp());
        }
        if let Some(session) = update.session {
            model.session = Set(session);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新实习安排失败: {e}")))?;

        Ok(Some(result.into_planning()))
    }

    /// 删除实习安排，观察、认证、病例、成绩等随外键级联删除
    pub async fn delete_planning_impl(&self, planning_id: i64) -> Result<bool> {
        let result = Plannings::delete_by_id(planning_id)
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除实习安排失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn create_pause_impl(
        &self,
        planning_id: i64,
        req: CreatePauseRequest,
    ) -> Result<PlanningPause> {
        let model = PauseActiveModel {
            planning_id: Set(planning_id),
            start_time: Set(req.start_time.timestamp()),
            end_time: Set(req.end_time.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建暂停时段失败: {e}")))?;

        Ok(result.into_pause())
    }

    pub async fn list_pauses_impl(&self, planning_id: i64) -> Result<Vec<PlanningPause>> {
        let result = PlanningPauses::find()
            .filter(PauseColumn::PlanningId.eq(planning_id))
            .order_by_asc(PauseColumn::StartTime)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询暂停时段失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_pause()).collect())
    }

    pub async fn delete_pause_impl(&self, planning_id: i64, pause_id: i64) -> Result<bool> {
        let result = PlanningPauses::delete_many()
            .filter(PauseColumn::Id.eq(pause_id))
            .filter(PauseColumn::PlanningId.eq(planning_id))
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除暂停时段失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
