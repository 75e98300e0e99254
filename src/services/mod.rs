pub(crate) mod access;
pub mod auth;
pub mod cases;
pub mod certifications;
pub mod grades;
pub mod grids;
pub mod groups;
pub mod observations;
pub mod plannings;
pub mod situations;
pub mod todos;
pub mod users;

pub use auth::AuthService;
pub use cases::CaseService;
pub use certifications::CertificationService;
pub use grades::GradeService;
pub use grids::GridService;
pub use groups::GroupService;
pub use observations::ObservationService;
pub use plannings::PlanningService;
pub use situations::SituationService;
pub use todos::TodoService;
pub use users::UserService;
