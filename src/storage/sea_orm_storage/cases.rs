//! 病例结构与病例记录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::case_cats::{ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as CaseCats};
use crate::entity::case_data::{ActiveModel as DataActiveModel, Column as DataColumn, Entity as CaseData};
use crate::entity::case_entries::{ActiveModel, Column, Entity as CaseEntries};
use crate::entity::case_fields::{ActiveModel as FieldActiveModel, Column as FieldColumn, Entity as CaseFields};
use crate::errors::{CompetVetError, Result};
use crate::models::cases::{
    entities::{CaseCategory, CaseCategoryWithFields, CaseDataValue, CaseEntry, CaseField},
    requests::{CreateCaseCategoryRequest, CreateCaseFieldRequest},
};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

async fn insert_case_data<C: ConnectionTrait>(
    conn: &C,
    entry_id: i64,
    data: Vec<CaseDataValue>,
) -> Result<()> {
    for value in data {
        DataActiveModel {
            entry_id: Set(entry_id),
            field_id: Set(value.field_id),
            value: Set(value.value),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("保存病例数据失败: {e}")))?;
    }
    Ok(())
}

impl SeaOrmStorage {
    /// 读取情境的病例结构：分类及其字段
    pub async fn get_case_structure_impl(
        &self,
        situation_id: i64,
    ) -> Result<Vec<CaseCategoryWithFields>> {
        let categories = CaseCats::find()
            .filter(CategoryColumn::SituationId.eq(situation_id))
            .order_by_asc(CategoryColumn::SortOrder)
            .order_by_asc(CategoryColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例分类失败: {e}")))?;
        if categories.is_empty() {
            return Ok(Vec::new());
        }

        let fields = CaseFields::find()
            .filter(FieldColumn::CategoryId.is_in(categories.iter().map(|c| c.id)))
            .order_by_asc(FieldColumn::SortOrder)
            .order_by_asc(FieldColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例字段失败: {e}")))?;

        let mut by_category: HashMap<i64, Vec<CaseField>> = HashMap::new();
        for field in fields {
            by_category
                .entry(field.category_id)
                .or_default()
                .push(field.into_field());
        }

        Ok(categories
            .into_iter()
            .map(|c| CaseCategoryWithFields {
                fields: by_category.remove(&c.id).unwrap_or_default(),
                category: c.into_category(),
            })
            .collect())
    }

    pub async fn create_case_category_impl(
        &self,
        situation_id: i64,
        req: CreateCaseCategoryRequest,
    ) -> Result<CaseCategory> {
        let model = CategoryActiveModel {
            situation_id: Set(situation_id),
            name: Set(req.name),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建病例分类失败: {e}")))?;

        Ok(result.into_category())
    }

    pub async fn get_case_category_by_id_impl(
        &self,
        category_id: i64,
    ) -> Result<Option<CaseCategory>> {
        let result = CaseCats::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例分类失败: {e}")))?;

        Ok(result.map(|m| m.into_category()))
    }

    pub async fn create_case_field_impl(
        &self,
        category_id: i64,
        req: CreateCaseFieldRequest,
    ) -> Result<CaseField> {
        let options = if req.options.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&req.options)?)
        };

        let model = FieldActiveModel {
            category_id: Set(category_id),
            idnumber: Set(req.idnumber),
            name: Set(req.name),
            field_type: Set(req.field_type.to_string()),
            options: Set(options),
            required: Set(req.required),
            sort_order: Set(req.sort_order.unwrap_or(0)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("创建病例字段失败: {e}")))?;

        Ok(result.into_field())
    }

    /// 创建病例记录及其字段值
    pub async fn create_case_entry_impl(
        &self,
        student_id: i64,
        planning_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<CaseEntry> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let entry = ActiveModel {
            student_id: Set(student_id),
            planning_id: Set(planning_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("创建病例记录失败: {e}")))?;

        insert_case_data(&txn, entry.id, data).await?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_case_entry_impl(entry.id)
            .await?
            .ok_or_else(|| CompetVetError::not_found(format!("Case entry {} not found", entry.id)))
    }

    pub async fn get_case_entry_impl(&self, entry_id: i64) -> Result<Option<CaseEntry>> {
        let Some(entry) = CaseEntries::find_by_id(entry_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例记录失败: {e}")))?
        else {
            return Ok(None);
        };

        let data = CaseData::find()
            .filter(DataColumn::EntryId.eq(entry_id))
            .order_by_asc(DataColumn::FieldId)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例数据失败: {e}")))?;

        Ok(Some(entry.into_entry(data)))
    }

    /// 整体替换病例记录的字段值
    pub async fn update_case_entry_impl(
        &self,
        entry_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<Option<CaseEntry>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(entry) = CaseEntries::find_by_id(entry_id)
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例记录失败: {e}")))?
        else {
            return Ok(None);
        };

        CaseData::delete_many()
            .filter(DataColumn::EntryId.eq(entry_id))
            .exec(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("清除病例数据失败: {e}")))?;
        insert_case_data(&txn, entry_id, data).await?;

        let mut model: ActiveModel = entry.into();
        model.updated_at = Set(chrono::Utc::now().timestamp());
        model
            .update(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新病例记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        self.get_case_entry_impl(entry_id).await
    }

    pub async fn delete_case_entry_impl(&self, entry_id: i64) -> Result<bool> {
        let result = CaseEntries::delete_by_id(entry_id)
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除病例记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_case_entries_impl(
        &self,
        planning_id: i64,
        student_id: i64,
    ) -> Result<Vec<CaseEntry>> {
        let entries = CaseEntries::find()
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .find_with_related(CaseData)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询病例列表失败: {e}")))?;

        Ok(entries
            .into_iter()
            .map(|(entry, data)| entry.into_entry(data))
            .collect())
    }

    /// 按学生统计病例数
    pub async fn count_case_entries_impl(&self, planning_id: i64) -> Result<HashMap<i64, i64>> {
        let rows = CaseEntries::find()
            .select_only()
            .column(Column::StudentId)
            .column_as(Expr::from(Func::count(Expr::col(Column::Id))), "entries")
            .filter(Column::PlanningId.eq(planning_id))
            .group_by(Column::StudentId)
            .into_tuple::<(i64, i64)>()
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("统计病例数量失败: {e}")))?;

        Ok(rows.into_iter().collect())
    }
}
