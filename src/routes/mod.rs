pub mod auth;

pub mod users;

pub mod groups;

pub mod situations;

pub mod plannings;

pub mod observations;

pub mod certifications;

pub mod cases;

pub mod grades;

pub mod grids;

pub mod todos;

pub use auth::configure_auth_routes;
pub use cases::configure_case_routes;
pub use certifications::configure_certification_routes;
pub use grids::configure_grid_routes;
pub use groups::configure_group_routes;
pub use observations::configure_observation_routes;
pub use plannings::configure_planning_routes;
pub use situations::configure_situation_routes;
pub use todos::configure_todo_routes;
pub use users::configure_user_routes;
