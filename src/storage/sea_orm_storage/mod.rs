//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod cases;
mod certifications;
mod grades;
mod grids;
mod groups;
mod observations;
mod plannings;
mod search;
mod situations;
mod todos;
mod users;

use std::collections::HashMap;
use std::time::Duration;

use crate::config::AppConfig;
use crate::errors::{CompetVetError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CompetVetError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CompetVetError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存数据库每个连接各自独立，只能保留一个常驻连接
        let in_memory = url.contains(":memory:");
        let mut pool = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { pool_size })
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(timeout));
        if in_memory {
            pool = pool.idle_timeout(None).max_lifetime(None);
        } else {
            pool = pool.idle_timeout(Duration::from_secs(300));
        }

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| CompetVetError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CompetVetError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CompetVetError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    cases::{
        entities::{CaseCategory, CaseCategoryWithFields, CaseDataValue, CaseEntry, CaseField},
        requests::{CreateCaseCategoryRequest, CreateCaseFieldRequest},
    },
    certifications::entities::{
        CertDecl, CertValid, CertValidStatus, DeclarationRecord, NewCertDecl,
    },
    grades::entities::{Grade, GradeType},
    grids::{
        entities::{Criterion, Grid, GridType},
        requests::{CreateCriterionRequest, CreateGridRequest},
    },
    groups::{
        entities::{Group, GroupMember, GroupMemberInfo},
        requests::{CreateGroupRequest, GroupListParams},
        responses::GroupListResponse,
    },
    observations::{
        entities::{
            NewObservation, Observation, ObservationCategory, ObservationComment,
            ObservationCriterionValue,
        },
        requests::UpdateObservationRequest,
    },
    plannings::{
        entities::{Planning, PlanningPause},
        requests::{CreatePauseRequest, CreatePlanningRequest, UpdatePlanningRequest},
    },
    search::responses::SearchResponse,
    situations::entities::{NewSituation, Situation, SituationMember, SituationRole},
    todos::{
        entities::{Todo, TodoStatus},
        requests::TodoListParams,
        responses::TodoListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        self.get_group_by_name_impl(name).await
    }

    async fn list_groups_with_pagination(
        &self,
        params: GroupListParams,
    ) -> Result<GroupListResponse> {
        self.list_groups_with_pagination_impl(params).await
    }

    async fn add_group_member(&self, group_id: i64, user_id: i64) -> Result<GroupMember> {
        self.add_group_member_impl(group_id, user_id).await
    }

    async fn remove_group_member(&self, group_id: i64, user_id: i64) -> Result<bool> {
        self.remove_group_member_impl(group_id, user_id).await
    }

    async fn list_group_members(&self, group_id: i64) -> Result<Vec<GroupMemberInfo>> {
        self.list_group_members_impl(group_id).await
    }

    async fn is_group_member(&self, group_id: i64, user_id: i64) -> Result<bool> {
        self.is_group_member_impl(group_id, user_id).await
    }

    async fn list_user_group_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        self.list_user_group_ids_impl(user_id).await
    }

    async fn create_situation(&self, situation: NewSituation) -> Result<Situation> {
        self.create_situation_impl(situation).await
    }

    async fn get_situation_by_id(&self, situation_id: i64) -> Result<Option<Situation>> {
        self.get_situation_by_id_impl(situation_id).await
    }

    async fn get_situation_by_shortname(&self, shortname: &str) -> Result<Option<Situation>> {
        self.get_situation_by_shortname_impl(shortname).await
    }

    async fn update_situation(
        &self,
        situation_id: i64,
        situation: NewSituation,
    ) -> Result<Option<Situation>> {
        self.update_situation_impl(situation_id, situation).await
    }

    async fn list_situations(&self) -> Result<Vec<Situation>> {
        self.list_situations_impl().await
    }

    async fn list_user_situations(
        &self,
        user_id: i64,
    ) -> Result<Vec<(Situation, Vec<SituationRole>)>> {
        self.list_user_situations_impl(user_id).await
    }

    async fn add_situation_member(
        &self,
        situation_id: i64,
        user_id: i64,
        role: SituationRole,
    ) -> Result<()> {
        self.add_situation_member_impl(situation_id, user_id, role).await
    }

    async fn list_situation_members(
        &self,
        situation_id: i64,
        role: Option<SituationRole>,
    ) -> Result<Vec<SituationMember>> {
        self.list_situation_members_impl(situation_id, role).await
    }

    async fn get_situation_roles(
        &self,
        situation_id: i64,
        user_id: i64,
    ) -> Result<Vec<SituationRole>> {
        self.get_situation_roles_impl(situation_id, user_id).await
    }

    async fn create_grid(&self, grid: CreateGridRequest) -> Result<Grid> {
        self.create_grid_impl(grid).await
    }

    async fn get_grid_by_id(&self, grid_id: i64) -> Result<Option<Grid>> {
        self.get_grid_by_id_impl(grid_id).await
    }

    async fn list_grids(&self, grid_type: Option<GridType>) -> Result<Vec<Grid>> {
        self.list_grids_impl(grid_type).await
    }

    async fn delete_grid(&self, grid_id: i64) -> Result<bool> {
        self.delete_grid_impl(grid_id).await
    }

    async fn list_grid_criteria(&self, grid_id: i64) -> Result<Vec<Criterion>> {
        self.list_grid_criteria_impl(grid_id).await
    }

    async fn get_criterion_by_id(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        self.get_criterion_by_id_impl(criterion_id).await
    }

    async fn create_criterion(
        &self,
        grid_id: i64,
        criterion: CreateCriterionRequest,
    ) -> Result<Criterion> {
        self.create_criterion_impl(grid_id, criterion).await
    }

    async fn create_planning(
        &self,
        situation_id: i64,
        planning: CreatePlanningRequest,
    ) -> Result<Planning> {
        self.create_planning_impl(situation_id, planning).await
    }

    async fn get_planning_by_id(&self, planning_id: i64) -> Result<Option<Planning>> {
        self.get_planning_by_id_impl(planning_id).await
    }

    async fn list_situation_plannings(
        &self,
        situation_id: i64,
        group_ids: Option<Vec<i64>>,
    ) -> Result<Vec<Planning>> {
        self.list_situation_plannings_impl(situation_id, group_ids).await
    }

    async fn update_planning(
        &self,
        planning_id: i64,
        update: UpdatePlanningRequest,
    ) -> Result<Option<Planning>> {
        self.update_planning_impl(planning_id, update).await
    }

    async fn delete_planning(&self, planning_id: i64) -> Result<bool> {
        self.delete_planning_impl(planning_id).await
    }

    async fn create_pause(
        &self,
        planning_id: i64,
        pause: CreatePauseRequest,
    ) -> Result<PlanningPause> {
        self.create_pause_impl(planning_id, pause).await
    }

    async fn list_pauses(&self, planning_id: i64) -> Result<Vec<PlanningPause>> {
        self.list_pauses_impl(planning_id).await
    }

    async fn delete_pause(&self, planning_id: i64, pause_id: i64) -> Result<bool> {
        self.delete_pause_impl(planning_id, pause_id).await
    }

    async fn create_observation(
        &self,
        observation: NewObservation,
        ask_observer: bool,
    ) -> Result<Observation> {
        self.create_observation_impl(observation, ask_observer).await
    }

    async fn get_observation_by_id(&self, observation_id: i64) -> Result<Option<Observation>> {
        self.get_observation_by_id_impl(observation_id).await
    }

    async fn get_observation_values(
        &self,
        observation_id: i64,
    ) -> Result<(Vec<ObservationCriterionValue>, Vec<ObservationComment>)> {
        self.get_observation_values_impl(observation_id).await
    }

    async fn update_observation(
        &self,
        observation_id: i64,
        author_id: i64,
        update: UpdateObservationRequest,
    ) -> Result<Option<Observation>> {
        self.update_observation_impl(observation_id, author_id, update).await
    }

    async fn list_planning_observations(
        &self,
        planning_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<Observation>> {
        self.list_planning_observations_impl(planning_id, student_id).await
    }

    async fn delete_observation(&self, observation_id: i64) -> Result<bool> {
        self.delete_observation_impl(observation_id).await
    }

    async fn count_completed_observations(
        &self,
        planning_id: i64,
        category: ObservationCategory,
    ) -> Result<HashMap<i64, i64>> {
        self.count_completed_observations_impl(planning_id, category).await
    }

    async fn upsert_declaration(
        &self,
        declaration: NewCertDecl,
        supervisors: Vec<i64>,
    ) -> Result<(CertDecl, Vec<i64>)> {
        self.upsert_declaration_impl(declaration, supervisors).await
    }

    async fn get_declaration_by_id(&self, declaration_id: i64) -> Result<Option<CertDecl>> {
        self.get_declaration_by_id_impl(declaration_id).await
    }

    async fn invite_supervisors(
        &self,
        declaration: &CertDecl,
        supervisors: Vec<i64>,
    ) -> Result<Vec<i64>> {
        self.invite_supervisors_impl(declaration, supervisors).await
    }

    async fn list_declaration_supervisors(&self, declaration_id: i64) -> Result<Vec<i64>> {
        self.list_declaration_supervisors_impl(declaration_id).await
    }

    async fn upsert_validation(
        &self,
        declaration: &CertDecl,
        supervisor_id: i64,
        status: CertValidStatus,
        comment: Option<String>,
    ) -> Result<CertValid> {
        self.upsert_validation_impl(declaration, supervisor_id, status, comment).await
    }

    async fn delete_declaration(&self, declaration_id: i64) -> Result<bool> {
        self.delete_declaration_impl(declaration_id).await
    }

    async fn list_student_declarations(
        &self,
        planning_id: i64,
        student_id: i64,
    ) -> Result<Vec<DeclarationRecord>> {
        self.list_student_declarations_impl(planning_id, student_id).await
    }

    async fn count_confirmed_criteria(
        &self,
        planning_id: i64,
        certif_grid_id: i64,
    ) -> Result<HashMap<i64, i64>> {
        self.count_confirmed_criteria_impl(planning_id, certif_grid_id)
            .await
    }

    async fn get_case_structure(&self, situation_id: i64) -> Result<Vec<CaseCategoryWithFields>> {
        self.get_case_structure_impl(situation_id).await
    }

    async fn create_case_category(
        &self,
        situation_id: i64,
        category: CreateCaseCategoryRequest,
    ) -> Result<CaseCategory> {
        self.create_case_category_impl(situation_id, category).await
    }

    async fn get_case_category_by_id(&self, category_id: i64) -> Result<Option<CaseCategory>> {
        self.get_case_category_by_id_impl(category_id).await
    }

    async fn create_case_field(
        &self,
        category_id: i64,
        field: CreateCaseFieldRequest,
    ) -> Result<CaseField> {
        self.create_case_field_impl(category_id, field).await
    }

    async fn create_case_entry(
        &self,
        student_id: i64,
        planning_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<CaseEntry> {
        self.create_case_entry_impl(student_id, planning_id, data).await
    }

    async fn get_case_entry(&self, entry_id: i64) -> Result<Option<CaseEntry>> {
        self.get_case_entry_impl(entry_id).await
    }

    async fn update_case_entry(
        &self,
        entry_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<Option<CaseEntry>> {
        self.update_case_entry_impl(entry_id, data).await
    }

    async fn delete_case_entry(&self, entry_id: i64) -> Result<bool> {
        self.delete_case_entry_impl(entry_id).await
    }

    async fn list_case_entries(&self, planning_id: i64, student_id: i64) -> Result<Vec<CaseEntry>> {
        self.list_case_entries_impl(planning_id, student_id).await
    }

    async fn count_case_entries(&self, planning_id: i64) -> Result<HashMap<i64, i64>> {
        self.count_case_entries_impl(planning_id).await
    }

    async fn upsert_grade(
        &self,
        planning_id: i64,
        student_id: i64,
        grade_type: GradeType,
        grade: i32,
    ) -> Result<Grade> {
        self.upsert_grade_impl(planning_id, student_id, grade_type, grade).await
    }

    async fn list_grades(&self, planning_id: i64, student_id: i64) -> Result<Vec<Grade>> {
        self.list_grades_impl(planning_id, student_id).await
    }

    async fn list_user_todos(
        &self,
        user_id: i64,
        params: TodoListParams,
    ) -> Result<TodoListResponse> {
        self.list_user_todos_impl(user_id, params).await
    }

    async fn get_todo_by_id(&self, todo_id: i64) -> Result<Option<Todo>> {
        self.get_todo_by_id_impl(todo_id).await
    }

    async fn update_todo_status(&self, todo_id: i64, status: TodoStatus) -> Result<Option<Todo>> {
        self.update_todo_status_impl(todo_id, status).await
    }

    async fn delete_todo(&self, todo_id: i64) -> Result<bool> {
        self.delete_todo_impl(todo_id).await
    }

    async fn search_situation(&self, situation_id: i64, term: &str) -> Result<SearchResponse> {
        self.search_situation_impl(situation_id, term).await
    }
}
