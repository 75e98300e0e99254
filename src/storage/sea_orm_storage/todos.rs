//! 待办事项存储操作

use super::SeaOrmStorage;
use crate::entity::todos::{ActiveModel, Column, Entity as Todos};
use crate::errors::{CompetVetError, Result};
use crate::models::{
    PaginationInfo,
    todos::{
        entities::{NewTodo, Todo, TodoAction, TodoStatus, todo_refers_to},
        requests::TodoListParams,
        responses::TodoListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

/// 写入一条待办，可在事务中调用
pub(super) async fn insert_todo<C: ConnectionTrait>(conn: &C, todo: NewTodo) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    let model = ActiveModel {
        user_id: Set(todo.user_id),
        target_user_id: Set(todo.target_user_id),
        planning_id: Set(todo.planning_id),
        action: Set(todo.action.to_string()),
        status: Set(TodoStatus::Pending.to_string()),
        data: Set(todo.data.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model
        .insert(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("创建待办失败: {e}")))?;

    Ok(())
}

/// 待办与业务对象的关联
pub(super) struct TodoLink {
    pub action: TodoAction,
    pub planning_id: i64,
    pub user_id: Option<i64>,
    pub key: &'static str,
    pub target_id: i64,
}

async fn find_pending_linked<C: ConnectionTrait>(
    conn: &C,
    link: &TodoLink,
) -> Result<Vec<crate::entity::todos::Model>> {
    let mut select = Todos::find()
        .filter(Column::Action.eq(link.action.to_string()))
        .filter(Column::PlanningId.eq(link.planning_id))
        .filter(Column::Status.eq(TodoStatus::Pending.to_string()));
    if let Some(user_id) = link.user_id {
        select = select.filter(Column::UserId.eq(user_id));
    }

    let rows = select
        .all(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("查询待办失败: {e}")))?;

    Ok(rows
        .into_iter()
        .filter(|m| todo_refers_to(&m.data_json(), link.key, link.target_id))
        .collect())
}

/// 将关联的待办标记为完成，返回处理条数
pub(super) async fn complete_linked_todos<C: ConnectionTrait>(
    conn: &C,
    link: TodoLink,
) -> Result<u64> {
    let rows = find_pending_linked(conn, &link).await?;
    let now = chrono::Utc::now().timestamp();
    let count = rows.len() as u64;

    for row in rows {
        let mut model: ActiveModel = row.into();
        model.status = Set(TodoStatus::Done.to_string());
        model.updated_at = Set(now);
        model
            .update(conn)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新待办失败: {e}")))?;
    }

    Ok(count)
}

/// 删除关联的未完成待办
pub(super) async fn delete_linked_todos<C: ConnectionTrait>(
    conn: &C,
    link: TodoLink,
) -> Result<u64> {
    let ids: Vec<i64> = find_pending_linked(conn, &link)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    if ids.is_empty() {
        return Ok(0);
    }

    let result = Todos::delete_many()
        .filter(Column::Id.is_in(ids))
        .exec(conn)
        .await
        .map_err(|e| CompetVetError::database_operation(format!("删除待办失败: {e}")))?;

    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 分页列出用户的待办
    pub async fn list_user_todos_impl(
        &self,
        user_id: i64,
        params: TodoListParams,
    ) -> Result<TodoListResponse> {
        let (page, size) = params.pagination.normalized();

        let mut select = Todos::find().filter(Column::UserId.eq(user_id));
        if let Some(status) = params.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询待办总数失败: {e}")))?;

        let todos = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询待办列表失败: {e}")))?;

        Ok(TodoListResponse {
            items: todos.into_iter().map(|m| m.into_todo()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }

    pub async fn get_todo_by_id_impl(&self, todo_id: i64) -> Result<Option<Todo>> {
        let result = Todos::find_by_id(todo_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询待办失败: {e}")))?;

        Ok(result.map(|m| m.into_todo()))
    }

    pub async fn update_todo_status_impl(
        &self,
        todo_id: i64,
        status: TodoStatus,
    ) -> Result<Option<Todo>> {
        let Some(existing) = Todos::find_by_id(todo_id)
            .one(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("查询待办失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.status = Set(status.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("更新待办失败: {e}")))?;

        Ok(Some(result.into_todo()))
    }

    pub async fn delete_todo_impl(&self, todo_id: i64) -> Result<bool> {
        let result = Todos::delete_by_id(todo_id)
            .exec(&self.db)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("删除待办失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
