//! 评分表格与标准存储操作

use super::SeaOrmStorage;
use crate::entity::criteria::{
    ActiveModel as CriterionActiveModel, Column as CriterionColumn, Entity as Criteria,
};
use crate::entity::grids::{ActiveModel, Column, Entity as Grids};
use crate::entity::situations::{Column as SituationColumn, Entity as Situations};
use crate::errors::{CompetVetError, Result};
use crate::models::grids::{
    entities::{Criterion, Grid, GridType},
    requests::{CreateCriterionRequest, CreateGridRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_grid_impl(&self, req: CreateGridRequest) -> Result<Grid> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            grid_type: Set(req.grid_type.to_string()),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建评分表格失败: {e}")))?;

        Ok(result.into_grid())
    }

    pub async fn get_grid_by_id_impl(&self, grid_id: i64) -> Result<Option<Grid>> {
        let result = Grids::find_by_id(grid_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询评分表格失败: {e}")))?;

        Ok(result.map(|m| m.into_grid()))
    }

    pub async fn list_grids_impl(&self, grid_type: Option<GridType>) -> Result<Vec<Grid>> {
        let mut select = Grids::find();
        if let Some(grid_type) = grid_type {
            select = select.filter(Column::GridType.eq(grid_type.to_string()));
        }

        let result = select
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetVetError::database_operation(format!("查询评分表格列表失败: {e}"))
            })?;

        Ok(result.into_iter().map(|m| m.into_grid()).collect())
    }

    /// 删除评分表格，标准随外键级联删除
    ///
    /// 仍被情境引用的表格不能删除。
    pub async fn delete_grid_impl(&self, grid_id: i64) -> Result<bool> {
        let in_use = Situations::find()
            .filter(
                Condition::any()
                    .add(SituationColumn::EvalGridId.eq(grid_id))
                    .add(SituationColumn::CertifGridId.eq(grid_id))
                    .add(SituationColumn::ListGridId.eq(grid_id)),
            )
            .count(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询表格引用失败: {e}")))?;
        if in_use > 0 {
            return Err(CompetVetError::conflict(format!(
                "Grid {grid_id} is used by {in_use} situation(s)"
            )));
        }

        let result = Grids::delete_by_id(grid_id)
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除评分表格失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_grid_criteria_impl(&self, grid_id: i64) -> Result<Vec<Criterion>> {
        let result = Criteria::find()
            .filter(CriterionColumn::GridId.eq(grid_id))
            .order_by_asc(CriterionColumn::SortOrder)
            .order_by_asc(CriterionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询评分标准失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_criterion()).collect())
    }

    pub async fn get_criterion_by_id_impl(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        let result = Criteria::find_by_id(criterion_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询评分标准失败: {e}")))?;

        Ok(result.map(|m| m.into_criterion()))
    }

    pub async fn create_criterion_impl(
        &self,
        grid_id: i64,
        req: CreateCriterionRequest,
    ) -> Result<Criterion> {
        let model = CriterionActiveModel {
            grid_id: Set(grid_id),
            parent_id: Set(req.parent_id),
            label: Set(req.label),
            idnumber: Set(req.idnumber),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建评分标准失败: {e}")))?;

        Ok(result.into_criterion())
    }
}
