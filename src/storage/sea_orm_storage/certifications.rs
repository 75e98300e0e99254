//! 能力认证存储操作

use std::collections::{BTreeSet, HashMap};

use super::SeaOrmStorage;
use super::todos::{TodoLink, complete_linked_todos, delete_linked_todos, insert_todo};
use crate::entity::cert_decl_assos::{
    ActiveModel as AssoActiveModel, Column as AssoColumn, Entity as CertDeclAssos,
};
use crate::entity::cert_decls::{ActiveModel, Column, Entity as CertDecls};
use crate::entity::criteria::{Column as CriterionColumn, Entity as Criteria};
use crate::entity::cert_valids::{
    ActiveModel as ValidActiveModel, Column as ValidColumn, Entity as CertValids,
};
use crate::errors::{CompetVetError, Result};
use crate::models::{
    certifications::entities::{
        CertDecl, CertValid, CertValidStatus, DeclarationRecord, NewCertDecl,
    },
    todos::entities::{NewTodo, TodoAction},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

/// 为声明添加尚未关联的督导，并为新督导生成待办
async fn attach_supervisors<C: ConnectionTrait>(
    conn: &C,
    declaration: &crate::entity::cert_decls::Model,
    supervisors: Vec<i64>,
) -> Result<Vec<i64>> {
    let mut all: BTreeSet<i64> = CertDeclAssos::find()
        .filter(AssoColumn::DeclarationId.eq(declaration.id))
        .all(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("查询认证督导失败: {e}")))?
        .into_iter()
        .map(|m| m.supervisor_id)
        .collect();

    let now = chrono::Utc::now().timestamp();
    for supervisor_id in supervisors {
        if supervisor_id == declaration.student_id || !all.insert(supervisor_id) {
            continue;
        }

        AssoActiveModel {
            declaration_id: Set(declaration.id),
            supervisor_id: Set(supervisor_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("邀请督导失败: {e}")))?;

        insert_todo(
            conn,
            NewTodo::ask_for_certif_validation(
                supervisor_id,
                declaration.student_id,
                declaration.planning_id,
                declaration.id,
            ),
        )
        .await?;
    }

    Ok(all.into_iter().collect())
}

impl SeaOrmStorage {
    /// 新建或覆盖 (学生, 计划, 标准) 的声明
    pub async fn upsert_declaration_impl(
        &self,
        new: NewCertDecl,
        supervisors: Vec<i64>,
    ) -> Result<(CertDecl, Vec<i64>)> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = CertDecls::find()
            .filter(Column::StudentId.eq(new.student_id))
            .filter(Column::PlanningId.eq(new.planning_id))
            .filter(Column::CriterionId.eq(new.criterion_id))
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证声明失败: {e}")))?;

        let declaration = match existing {
            Some(model) => {
                let mut active: ActiveModel = model.into();
                active.level = Set(new.level);
                active.comment = Set(new.comment);
                active.status = Set(new.status.to_string());
                active.updated_at = Set(now);
                active.update(&txn).await
            }
            None => {
                ActiveModel {
                    student_id: Set(new.student_id),
                    planning_id: Set(new.planning_id),
                    criterion_id: Set(new.criterion_id),
                    level: Set(new.level),
                    comment: Set(new.comment),
                    status: Set(new.status.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
            }
        }
        .map_err(|e| CompetVetError::database_operation(format!("保存认证声明失败: {e}")))?;

        let all_supervisors = attach_supervisors(&txn, &declaration, supervisors).await?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((declaration.into_decl(), all_supervisors))
    }

    pub async fn get_declaration_by_id_impl(&self, declaration_id: i64) -> Result<Option<CertDecl>> {
        let result = CertDecls::find_by_id(declaration_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证声明失败: {e}")))?;

        Ok(result.map(|m| m.into_decl()))
    }

    pub async fn invite_supervisors_impl(
        &self,
        declaration: &CertDecl,
        supervisors: Vec<i64>,
    ) -> Result<Vec<i64>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let model = CertDecls::find_by_id(declaration.id)
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证声明失败: {e}")))?
            .ok_or_else(|| {
                CompetVetError::not_found(format!("Declaration {} not found", declaration.id))
            })?;

        let all = attach_supervisors(&txn, &model, supervisors).await?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(all)
    }

    pub async fn list_declaration_supervisors_impl(&self, declaration_id: i64) -> Result<Vec<i64>> {
        let rows = CertDeclAssos::find()
            .filter(AssoColumn::DeclarationId.eq(declaration_id))
            .order_by_asc(AssoColumn::SupervisorId)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证督导失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.supervisor_id).collect())
    }

    /// 督导给出验证结论，重复验证时覆盖原结论
    pub async fn upsert_validation_impl(
        &self,
        declaration: &CertDecl,
        supervisor_id: i64,
        status: CertValidStatus,
        comment: Option<String>,
    ) -> Result<CertValid> {
        let now = chrono::Utc::now().timestamp();
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = CertValids::find()
            .filter(ValidColumn::DeclarationId.eq(declaration.id))
            .filter(ValidColumn::SupervisorId.eq(supervisor_id))
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证验证失败: {e}")))?;

        let validation = match existing {
            Some(model) => {
                let mut active: ValidActiveModel = model.into();
                active.status = Set(status.to_string());
                active.comment = Set(comment);
                active.updated_at = Set(now);
                active.update(&txn).await
            }
            None => {
                ValidActiveModel {
                    declaration_id: Set(declaration.id),
                    supervisor_id: Set(supervisor_id),
                    status: Set(status.to_string()),
                    comment: Set(comment),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await
            }
        }
        .map_err(|e| CompetVetError::database_operation(format!("保存认证验证失败: {e}")))?;

        complete_linked_todos(
            &txn,
            TodoLink {
                action: TodoAction::AskForCertifValidation,
                planning_id: declaration.planning_id,
                user_id: Some(supervisor_id),
                key: "declaration_id",
                target_id: declaration.id,
            },
        )
        .await?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(validation.into_valid())
    }

    /// 删除声明及其待办，督导关联与验证随外键级联删除
    pub async fn delete_declaration_impl(&self, declaration_id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("开启事务失败: {e}")))?;

        let Some(existing) = CertDecls::find_by_id(declaration_id)
            .one(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证声明失败: {e}")))?
        else {
            return Ok(false);
        };

        delete_linked_todos(
            &txn,
            TodoLink {
                action: TodoAction::AskForCertifValidation,
                planning_id: existing.planning_id,
                user_id: None,
                key: "declaration_id",
                target_id: declaration_id,
            },
        )
        .await?;

        let result = CertDecls::delete_by_id(declaration_id)
            .exec(&txn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除认证声明失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 读取学生在计划中的全部声明及其督导、验证
    pub async fn list_student_declarations_impl(
        &self,
        planning_id: i64,
        student_id: i64,
    ) -> Result<Vec<DeclarationRecord>> {
        let declarations = CertDecls::find()
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证声明失败: {e}")))?;
        if declarations.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = declarations.iter().map(|d| d.id).collect();
        let assos = CertDeclAssos::find()
            .filter(AssoColumn::DeclarationId.is_in(ids.clone()))
            .order_by_asc(AssoColumn::SupervisorId)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证督导失败: {e}")))?;
        let valids = CertValids::find()
            .filter(ValidColumn::DeclarationId.is_in(ids))
            .order_by_asc(ValidColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证验证失败: {e}")))?;

        let mut supervisors: HashMap<i64, Vec<i64>> = HashMap::new();
        for asso in assos {
            supervisors
                .entry(asso.declaration_id)
                .or_default()
                .push(asso.supervisor_id);
        }
        let mut validations: HashMap<i64, Vec<CertValid>> = HashMap::new();
        for valid in valids {
            validations
                .entry(valid.declaration_id)
                .or_default()
                .push(valid.into_valid());
        }

        Ok(declarations
            .into_iter()
            .map(|d| DeclarationRecord {
                supervisors: supervisors.remove(&d.id).unwrap_or_default(),
                validations: validations.remove(&d.id).unwrap_or_default(),
                declaration: d.into_decl(),
            })
            .collect())
    }

    /// 按学生统计认证表格中至少获得一次 confirmed 的根标准数，同一标准只计一次
    pub async fn count_confirmed_criteria_impl(
        &self,
        planning_id: i64,
        certif_grid_id: i64,
    ) -> Result<HashMap<i64, i64>> {
        let roots: Vec<i64> = Criteria::find()
            .select_only()
            .column(CriterionColumn::Id)
            .filter(CriterionColumn::GridId.eq(certif_grid_id))
            .filter(CriterionColumn::ParentId.is_null())
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询认证标准失败: {e}")))?;
        if roots.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = CertValids::find()
            .filter(ValidColumn::Status.eq(CertValidStatus::Confirmed.to_string()))
            .find_also_related(CertDecls)
            .filter(Column::PlanningId.eq(planning_id))
            .filter(Column::CriterionId.is_in(roots))
            .all(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("统计认证进度失败: {e}")))?;

        let mut confirmed: HashMap<i64, BTreeSet<i64>> = HashMap::new();
        for declaration in rows.into_iter().filter_map(|(_, d)| d) {
            confirmed
                .entry(declaration.student_id)
                .or_default()
                .insert(declaration.criterion_id);
        }

        Ok(confirmed
            .into_iter()
            .map(|(student_id, criteria)| (student_id, criteria.len() as i64))
            .collect())
    }
}
