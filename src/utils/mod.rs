pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeCategoryIdI64, SafeDeclarationIdI64, SafeEntryIdI64, SafeGridIdI64, SafeGroupIdI64,
    SafeObservationIdI64, SafePauseIdI64, SafePlanningIdI64, SafeSituationIdI64, SafeTodoIdI64,
    SafeUserIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
