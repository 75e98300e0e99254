//! 基于内存 SQLite 的存储层集成测试

use chrono::{Duration, Utc};

use rust_competvet_next::errors::CompetVetError;
use rust_competvet_next::models::{
    PaginationQuery,
    cases::{
        entities::{CaseDataValue, CaseFieldType},
        requests::{CreateCaseCategoryRequest, CreateCaseFieldRequest},
    },
    certifications::entities::{CertDeclStatus, CertValidStatus, NewCertDecl},
    grades::entities::GradeType,
    grids::{
        entities::GridType,
        requests::{CreateCriterionRequest, CreateGridRequest},
    },
    groups::requests::CreateGroupRequest,
    observations::{
        entities::{NewObservation, ObservationCategory, ObservationStatus},
        requests::UpdateObservationRequest,
    },
    plannings::{entities::Planning, requests::CreatePlanningRequest},
    situations::entities::{NewSituation, Situation, SituationRole},
    todos::{
        entities::{TodoAction, TodoStatus},
        requests::TodoListParams,
    },
    users::{entities::UserRole, requests::CreateUserRequest},
};
use rust_competvet_next::storage::{Storage, sea_orm_storage::SeaOrmStorage};

async fn setup() -> SeaOrmStorage {
    SeaOrmStorage::connect("sqlite::memory:", 1, 5)
        .await
        .expect("in-memory storage")
}

async fn user(storage: &SeaOrmStorage, username: &str) -> i64 {
    storage
        .create_user(CreateUserRequest {
            username: username.to_string(),
            email: format!("{username}@example.org"),
            password: "not-a-real-hash".to_string(),
            role: UserRole::User,
            profile_name: Some(username.to_uppercase()),
            avatar_url: None,
        })
        .await
        .expect("create user")
        .id
}

async fn situation(storage: &SeaOrmStorage, shortname: &str, certif_grid_id: Option<i64>) -> Situation {
    storage
        .create_situation(NewSituation {
            name: format!("Situation {shortname}"),
            shortname: shortname.to_string(),
            intro: None,
            eval_num: 2,
            autoeval_num: 1,
            cert_percent: 50,
            has_eval: true,
            has_certif: certif_grid_id.is_some(),
            has_list: false,
            eval_grid_id: None,
            certif_grid_id,
            list_grid_id: None,
            grade_k1: 1,
            grade_k2: 1,
        })
        .await
        .expect("create situation")
}

/// 建立一个情境、一个分组和一个计划，学生同时在分组和情境中
async fn planning_with_student(storage: &SeaOrmStorage, student: i64) -> Planning {
    let situation = situation(storage, "surgery", None).await;
    let group = storage
        .create_group(CreateGroupRequest {
            name: "Group A".to_string(),
            description: None,
        })
        .await
        .expect("create group");
    storage
        .add_group_member(group.id, student)
        .await
        .expect("add group member");
    storage
        .add_situation_member(situation.id, student, SituationRole::Student)
        .await
        .expect("add student");

    let now = Utc::now();
    storage
        .create_planning(
            situation.id,
            CreatePlanningRequest {
                group_id: group.id,
                start_time: now - Duration::days(1),
                end_time: now + Duration::days(6),
                session: "Spring rotation".to_string(),
            },
        )
        .await
        .expect("create planning")
}

fn todo_params() -> TodoListParams {
    TodoListParams {
        pagination: PaginationQuery { page: 1, size: 20 },
        status: None,
    }
}

#[tokio::test]
async fn test_situation_roles_and_membership() {
    let storage = setup().await;
    let alice = user(&storage, "alice").await;
    let situation = situation(&storage, "medicine", None).await;

    storage
        .add_situation_member(situation.id, alice, SituationRole::Student)
        .await
        .expect("student role");
    storage
        .add_situation_member(situation.id, alice, SituationRole::Observer)
        .await
        .expect("observer role");

    let duplicate = storage
        .add_situation_member(situation.id, alice, SituationRole::Student)
        .await;
    assert!(matches!(duplicate, Err(CompetVetError::Conflict(_))));

    let roles = storage
        .get_situation_roles(situation.id, alice)
        .await
        .expect("roles");
    assert_eq!(SituationRole::top_role(&roles), SituationRole::Observer);

    let students = storage
        .list_situation_members(situation.id, Some(SituationRole::Student))
        .await
        .expect("members");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].user.id, alice);

    let mine = storage.list_user_situations(alice).await.expect("situations");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].0.shortname, "medicine");
}

#[tokio::test]
async fn test_search_matches_students_and_sessions() {
    let storage = setup().await;
    let student = user(&storage, "bob").await;
    let planning = planning_with_student(&storage, student).await;

    let by_name = storage
        .search_situation(planning.situation_id, "bo")
        .await
        .expect("search");
    assert_eq!(by_name.students.len(), 1);
    assert!(by_name.plannings.is_empty());

    let by_session = storage
        .search_situation(planning.situation_id, "spring")
        .await
        .expect("search");
    assert!(by_session.students.is_empty());
    assert_eq!(by_session.plannings.len(), 1);
}

#[tokio::test]
async fn test_completed_observations_are_counted_per_student() {
    let storage = setup().await;
    let student = user(&storage, "carol").await;
    let observer = user(&storage, "dave").await;
    let planning = planning_with_student(&storage, student).await;

    // 学生请求观察：观察者收到一条待办
    let observation = storage
        .create_observation(
            NewObservation {
                planning_id: planning.id,
                student_id: student,
                observer_id: observer,
                category: ObservationCategory::Eval,
                status: ObservationStatus::NotStarted,
            },
            true,
        )
        .await
        .expect("create observation");
    storage
        .create_observation(
            NewObservation {
                planning_id: planning.id,
                student_id: student,
                observer_id: student,
                category: ObservationCategory::Autoeval,
                status: ObservationStatus::InProgress,
            },
            false,
        )
        .await
        .expect("create autoeval");

    let todos = storage
        .list_user_todos(observer, todo_params())
        .await
        .expect("todos");
    assert_eq!(todos.items.len(), 1);
    assert_eq!(todos.items[0].action, TodoAction::AskForObservation);
    assert_eq!(todos.items[0].status, TodoStatus::Pending);

    let counts = storage
        .count_completed_observations(planning.id, ObservationCategory::Eval)
        .await
        .expect("count");
    assert!(counts.is_empty());

    storage
        .update_observation(
            observation.id,
            observer,
            UpdateObservationRequest {
                criteria: None,
                comments: None,
                status: Some(ObservationStatus::Completed),
            },
        )
        .await
        .expect("update")
        .expect("observation exists");

    let counts = storage
        .count_completed_observations(planning.id, ObservationCategory::Eval)
        .await
        .expect("count");
    assert_eq!(counts.get(&student), Some(&1));

    let todos = storage
        .list_user_todos(observer, todo_params())
        .await
        .expect("todos");
    assert_eq!(todos.items[0].status, TodoStatus::Done);
}

#[tokio::test]
async fn test_deleting_observation_drops_pending_todo() {
    let storage = setup().await;
    let student = user(&storage, "erin").await;
    let observer = user(&storage, "frank").await;
    let planning = planning_with_student(&storage, student).await;

    let observation = storage
        .create_observation(
            NewObservation {
                planning_id: planning.id,
                student_id: student,
                observer_id: observer,
                category: ObservationCategory::Eval,
                status: ObservationStatus::NotStarted,
            },
            true,
        )
        .await
        .expect("create observation");

    assert!(storage.delete_observation(observation.id).await.expect("delete"));
    assert!(
        storage
            .get_observation_by_id(observation.id)
            .await
            .expect("get")
            .is_none()
    );

    let todos = storage
        .list_user_todos(observer, todo_params())
        .await
        .expect("todos");
    assert!(todos.items.is_empty());
}

#[tokio::test]
async fn test_grade_upsert_keeps_one_row_per_type() {
    let storage = setup().await;
    let student = user(&storage, "grace").await;
    let planning = planning_with_student(&storage, student).await;

    storage
        .upsert_grade(planning.id, student, GradeType::Eval, 60)
        .await
        .expect("first grade");
    let updated = storage
        .upsert_grade(planning.id, student, GradeType::Eval, 75)
        .await
        .expect("second grade");
    storage
        .upsert_grade(planning.id, student, GradeType::Certif, 1)
        .await
        .expect("certif grade");

    let grades = storage
        .list_grades(planning.id, student)
        .await
        .expect("list grades");
    assert_eq!(grades.len(), 2);
    let eval = grades
        .iter()
        .find(|g| g.grade_type == GradeType::Eval)
        .expect("eval grade");
    assert_eq!(eval.grade, 75);
    assert_eq!(eval.id, updated.id);
}

#[tokio::test]
async fn test_declaration_upsert_validation_and_todos() {
    let storage = setup().await;
    let student = user(&storage, "heidi").await;
    let supervisor = user(&storage, "ivan").await;
    let planning = planning_with_student(&storage, student).await;

    let grid = storage
        .create_grid(CreateGridRequest {
            name: "Clinical skills".to_string(),
            grid_type: GridType::Certif,
            sort_order: None,
        })
        .await
        .expect("grid");
    let criterion = storage
        .create_criterion(
            grid.id,
            CreateCriterionRequest {
                parent_id: None,
                label: "Suturing".to_string(),
                idnumber: "SUT".to_string(),
                sort_order: None,
            },
        )
        .await
        .expect("criterion");

    let new_decl = |level: i32| NewCertDecl {
        student_id: student,
        planning_id: planning.id,
        criterion_id: criterion.id,
        level,
        comment: None,
        status: CertDeclStatus::SeenDone,
    };

    let (first, supervisors) = storage
        .upsert_declaration(new_decl(40), vec![supervisor, supervisor, student])
        .await
        .expect("declare");
    assert_eq!(supervisors, vec![supervisor]);

    // 再次声明覆盖原声明，不重复邀请督导
    let (second, supervisors) = storage
        .upsert_declaration(new_decl(80), vec![supervisor])
        .await
        .expect("redeclare");
    assert_eq!(first.id, second.id);
    assert_eq!(second.level, 80);
    assert_eq!(supervisors, vec![supervisor]);

    let todos = storage
        .list_user_todos(supervisor, todo_params())
        .await
        .expect("todos");
    assert_eq!(todos.items.len(), 1);
    assert_eq!(todos.items[0].action, TodoAction::AskForCertifValidation);

    storage
        .upsert_validation(&second, supervisor, CertValidStatus::LevelNotReached, None)
        .await
        .expect("validate");
    let valid = storage
        .upsert_validation(&second, supervisor, CertValidStatus::Confirmed, None)
        .await
        .expect("revalidate");
    assert_eq!(valid.status, CertValidStatus::Confirmed);

    let records = storage
        .list_student_declarations(planning.id, student)
        .await
        .expect("records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].validations.len(), 1);

    let confirmed = storage
        .count_confirmed_criteria(planning.id, grid.id)
        .await
        .expect("confirmed");
    assert_eq!(confirmed.get(&student), Some(&1));

    let todos = storage
        .list_user_todos(supervisor, todo_params())
        .await
        .expect("todos");
    assert_eq!(todos.items[0].status, TodoStatus::Done);

    assert!(storage.delete_declaration(second.id).await.expect("delete"));
    assert!(
        storage
            .list_student_declarations(planning.id, student)
            .await
            .expect("records")
            .is_empty()
    );
}

#[tokio::test]
async fn test_case_entry_data_is_replaced_as_a_whole() {
    let storage = setup().await;
    let student = user(&storage, "judy").await;
    let planning = planning_with_student(&storage, student).await;

    let category = storage
        .create_case_category(
            planning.situation_id,
            CreateCaseCategoryRequest {
                name: "Patient".to_string(),
                sort_order: Some(1),
            },
        )
        .await
        .expect("category");
    let species = storage
        .create_case_field(
            category.id,
            CreateCaseFieldRequest {
                idnumber: "species".to_string(),
                name: "Species".to_string(),
                field_type: CaseFieldType::Select,
                options: vec!["dog".to_string(), "cat".to_string()],
                required: true,
                sort_order: None,
            },
        )
        .await
        .expect("species field");
    let notes = storage
        .create_case_field(
            category.id,
            CreateCaseFieldRequest {
                idnumber: "notes".to_string(),
                name: "Notes".to_string(),
                field_type: CaseFieldType::Textarea,
                options: Vec::new(),
                required: false,
                sort_order: None,
            },
        )
        .await
        .expect("notes field");

    let structure = storage
        .get_case_structure(planning.situation_id)
        .await
        .expect("structure");
    assert_eq!(structure.len(), 1);
    assert_eq!(structure[0].fields.len(), 2);

    let entry = storage
        .create_case_entry(
            student,
            planning.id,
            vec![
                CaseDataValue {
                    field_id: species.id,
                    value: "dog".to_string(),
                },
                CaseDataValue {
                    field_id: notes.id,
                    value: "limping".to_string(),
                },
            ],
        )
        .await
        .expect("entry");
    assert_eq!(entry.data.len(), 2);

    let updated = storage
        .update_case_entry(
            entry.id,
            vec![CaseDataValue {
                field_id: species.id,
                value: "cat".to_string(),
            }],
        )
        .await
        .expect("update")
        .expect("entry exists");
    assert_eq!(updated.data.len(), 1);
    assert_eq!(updated.data[0].value, "cat");

    let counts = storage
        .count_case_entries(planning.id)
        .await
        .expect("count");
    assert_eq!(counts.get(&student), Some(&1));

    assert!(storage.delete_case_entry(entry.id).await.expect("delete"));
    assert!(
        storage
            .list_case_entries(planning.id, student)
            .await
            .expect("list")
            .is_empty()
    );
}

async fn certif_grid(storage: &SeaOrmStorage, name: &str, idnumber: &str) -> (i64, i64) {
    let grid = storage
        .create_grid(CreateGridRequest {
            name: name.to_string(),
            grid_type: GridType::Certif,
            sort_order: None,
        })
        .await
        .expect("grid");
    let root = storage
        .create_criterion(
            grid.id,
            CreateCriterionRequest {
                parent_id: None,
                label: name.to_string(),
                idnumber: idnumber.to_string(),
                sort_order: None,
            },
        )
        .await
        .expect("criterion");
    (grid.id, root.id)
}

#[tokio::test]
async fn test_confirmed_criteria_only_count_the_given_grid() {
    let storage = setup().await;
    let student = user(&storage, "kevin").await;
    let supervisor = user(&storage, "laura").await;
    let planning = planning_with_student(&storage, student).await;

    let (old_grid, old_root) = certif_grid(&storage, "Anesthesia", "ANE").await;
    let (new_grid, _) = certif_grid(&storage, "Imaging", "IMG").await;

    let (declaration, _) = storage
        .upsert_declaration(
            NewCertDecl {
                student_id: student,
                planning_id: planning.id,
                criterion_id: old_root,
                level: 90,
                comment: None,
                status: CertDeclStatus::SeenDone,
            },
            vec![supervisor],
        )
        .await
        .expect("declare");
    storage
        .upsert_validation(&declaration, supervisor, CertValidStatus::Confirmed, None)
        .await
        .expect("validate");

    let on_old = storage
        .count_confirmed_criteria(planning.id, old_grid)
        .await
        .expect("old grid");
    assert_eq!(on_old.get(&student), Some(&1));

    // 情境换成新的认证表格后，旧表格上的确认不再计入
    let on_new = storage
        .count_confirmed_criteria(planning.id, new_grid)
        .await
        .expect("new grid");
    assert!(on_new.get(&student).is_none());
}

#[tokio::test]
async fn test_grid_used_by_situation_cannot_be_deleted() {
    let storage = setup().await;
    let (used, _) = certif_grid(&storage, "Surgery skills", "SURG").await;
    let (unused, _) = certif_grid(&storage, "Spare", "SPARE").await;
    situation(&storage, "orthopedics", Some(used)).await;

    let err = storage.delete_grid(used).await.expect_err("grid in use");
    assert!(matches!(err, CompetVetError::Conflict(_)));
    assert!(storage.get_grid_by_id(used).await.expect("get").is_some());

    assert!(storage.delete_grid(unused).await.expect("delete"));
    assert!(!storage.delete_grid(unused).await.expect("delete again"));
}
