use std::collections::HashMap;
use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（password 字段为哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 分组管理方法
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<Group>>;
    async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>>;
    async fn list_groups_with_pagination(&self, params: GroupListParams)
    -> Result<GroupListResponse>;
    async fn add_group_member(&self, group_id: i64, user_id: i64) -> Result<GroupMember>;
    async fn remove_group_member(&self, group_id: i64, user_id: i64) -> Result<bool>;
    async fn list_group_members(&self, group_id: i64) -> Result<Vec<GroupMemberInfo>>;
    async fn is_group_member(&self, group_id: i64, user_id: i64) -> Result<bool>;
    // 用户所在的分组ID
    async fn list_user_group_ids(&self, user_id: i64) -> Result<Vec<i64>>;

    /// 实习情境管理方法
    async fn create_situation(&self, situation: NewSituation) -> Result<Situation>;
    async fn get_situation_by_id(&self, situation_id: i64) -> Result<Option<Situation>>;
    async fn get_situation_by_shortname(&self, shortname: &str) -> Result<Option<Situation>>;
    async fn update_situation(
        &self,
        situation_id: i64,
        situation: NewSituation,
    ) -> Result<Option<Situation>>;
    // 列出全部情境（管理员）
    async fn list_situations(&self) -> Result<Vec<Situation>>;
    // 列出用户参与的情境及其在每个情境中的全部角色
    async fn list_user_situations(&self, user_id: i64)
    -> Result<Vec<(Situation, Vec<SituationRole>)>>;
    async fn add_situation_member(
        &self,
        situation_id: i64,
        user_id: i64,
        role: SituationRole,
    ) -> Result<()>;
    async fn list_situation_members(
        &self,
        situation_id: i64,
        role: Option<SituationRole>,
    ) -> Result<Vec<SituationMember>>;
    // 用户在情境中的全部角色
    async fn get_situation_roles(&self, situation_id: i64, user_id: i64)
    -> Result<Vec<SituationRole>>;

    /// 评分表格管理方法
    async fn create_grid(&self, grid: CreateGridRequest) -> Result<Grid>;
    async fn get_grid_by_id(&self, grid_id: i64) -> Result<Option<Grid>>;
    async fn list_grids(&self, grid_type: Option<GridType>) -> Result<Vec<Grid>>;
    async fn delete_grid(&self, grid_id: i64) -> Result<bool>;
    async fn list_grid_criteria(&self, grid_id: i64) -> Result<Vec<Criterion>>;
    async fn get_criterion_by_id(&self, criterion_id: i64) -> Result<Option<Criterion>>;
    async fn create_criterion(
        &self,
        grid_id: i64,
        criterion: CreateCriterionRequest,
    ) -> Result<Criterion>;

    /// 实习安排管理方法
    async fn create_planning(
        &self,
        situation_id: i64,
        planning: CreatePlanningRequest,
    ) -> Result<Planning>;
    async fn get_planning_by_id(&self, planning_id: i64) -> Result<Option<Planning>>;
    // 列出情境下的安排，group_ids 为 Some 时只返回这些分组的安排
    async fn list_situation_plannings(
        &self,
        situation_id: i64,
        group_ids: Option<Vec<i64>>,
    ) -> Result<Vec<Planning>>;
    async fn update_planning(
        &self,
        planning_id: i64,
        update: UpdatePlanningRequest,
    ) -> Result<Option<Planning>>;
    async fn delete_planning(&self, planning_id: i64) -> Result<bool>;
    async fn create_pause(&self, planning_id: i64, pause: CreatePauseRequest)
    -> Result<PlanningPause>;
    async fn list_pauses(&self, planning_id: i64) -> Result<Vec<PlanningPause>>;
    async fn delete_pause(&self, planning_id: i64, pause_id: i64) -> Result<bool>;

    /// 观察评估管理方法
    // 创建观察，ask_observer 为 true 时同时为观察者创建待办
    async fn create_observation(
        &self,
        observation: NewObservation,
        ask_observer: bool,
    ) -> Result<Observation>;
    async fn get_observation_by_id(&self, observation_id: i64) -> Result<Option<Observation>>;
    async fn get_observation_values(
        &self,
        observation_id: i64,
    ) -> Result<(Vec<ObservationCriterionValue>, Vec<ObservationComment>)>;
    // 编辑观察，author_id 为评语作者
    async fn update_observation(
        &self,
        observation_id: i64,
        author_id: i64,
        update: UpdateObservationRequest,
    ) -> Result<Option<Observation>>;
    async fn list_planning_observations(
        &self,
        planning_id: i64,
        student_id: Option<i64>,
    ) -> Result<Vec<Observation>>;
    async fn delete_observation(&self, observation_id: i64) -> Result<bool>;
    // 按学生统计已完成的观察数量
    async fn count_completed_observations(
        &self,
        planning_id: i64,
        category: ObservationCategory,
    ) -> Result<HashMap<i64, i64>>;

    /// 能力认证管理方法
    // 按 (学生, 计划, 标准) 新建或覆盖声明，并邀请督导
    async fn upsert_declaration(
        &self,
        declaration: NewCertDecl,
        supervisors: Vec<i64>,
    ) -> Result<(CertDecl, Vec<i64>)>;
    async fn get_declaration_by_id(&self, declaration_id: i64) -> Result<Option<CertDecl>>;
    // 邀请督导，返回声明当前的全部督导
    async fn invite_supervisors(
        &self,
        declaration: &CertDecl,
        supervisors: Vec<i64>,
    ) -> Result<Vec<i64>>;
    async fn list_declaration_supervisors(&self, declaration_id: i64) -> Result<Vec<i64>>;
    // 督导给出或修改验证结论，并关闭其待办
    async fn upsert_validation(
        &self,
        declaration: &CertDecl,
        supervisor_id: i64,
        status: CertValidStatus,
        comment: Option<String>,
    ) -> Result<CertValid>;
    async fn delete_declaration(&self, declaration_id: i64) -> Result<bool>;
    async fn list_student_declarations(
        &self,
        planning_id: i64,
        student_id: i64,
    ) -> Result<Vec<DeclarationRecord>>;
    // 按学生统计认证表格中至少有一次 confirmed 验证的根标准数
    async fn count_confirmed_criteria(
        &self,
        planning_id: i64,
        certif_grid_id: i64,
    ) -> Result<HashMap<i64, i64>>;

    /// 病例管理方法
    async fn get_case_structure(&self, situation_id: i64) -> Result<Vec<CaseCategoryWithFields>>;
    async fn create_case_category(
        &self,
        situation_id: i64,
        category: CreateCaseCategoryRequest,
    ) -> Result<CaseCategory>;
    async fn get_case_category_by_id(&self, category_id: i64) -> Result<Option<CaseCategory>>;
    async fn create_case_field(
        &self,
        category_id: i64,
        field: CreateCaseFieldRequest,
    ) -> Result<CaseField>;
    async fn create_case_entry(
        &self,
        student_id: i64,
        planning_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<CaseEntry>;
    async fn get_case_entry(&self, entry_id: i64) -> Result<Option<CaseEntry>>;
    async fn update_case_entry(
        &self,
        entry_id: i64,
        data: Vec<CaseDataValue>,
    ) -> Result<Option<CaseEntry>>;
    async fn delete_case_entry(&self, entry_id: i64) -> Result<bool>;
    async fn list_case_entries(&self, planning_id: i64, student_id: i64) -> Result<Vec<CaseEntry>>;
    // 按学生统计病例数
    async fn count_case_entries(&self, planning_id: i64) -> Result<HashMap<i64, i64>>;

    /// 成绩管理方法
    async fn upsert_grade(
        &self,
        planning_id: i64,
        student_id: i64,
        grade_type: GradeType,
        grade: i32,
    ) -> Result<Grade>;
    async fn list_grades(&self, planning_id: i64, student_id: i64) -> Result<Vec<Grade>>;

    /// 待办管理方法
    async fn list_user_todos(&self, user_id: i64, params: TodoListParams)
    -> Result<TodoListResponse>;
    async fn get_todo_by_id(&self, todo_id: i64) -> Result<Option<Todo>>;
    async fn update_todo_status(&self, todo_id: i64, status: TodoStatus) -> Result<Option<Todo>>;
    async fn delete_todo(&self, todo_id: i64) -> Result<bool>;

    /// 搜索
    async fn search_situation(&self, situation_id: i64, term: &str) -> Result<SearchResponse>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
