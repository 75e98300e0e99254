//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_competvet_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CompetVetError {
            $($variant(String),)*
        }

        impl CompetVetError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CompetVetError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CompetVetError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CompetVetError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CompetVetError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CompetVetError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_competvet_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Conflict("E014", "Resource Conflict"),
    InvalidState("E015", "Invalid State Transition"),
}

impl CompetVetError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CompetVetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CompetVetError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CompetVetError {
    fn from(err: sea_orm::DbErr) -> Self {
        CompetVetError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CompetVetError {
    fn from(err: std::io::Error) -> Self {
        CompetVetError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CompetVetError {
    fn from(err: serde_json::Error) -> Self {
        CompetVetError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CompetVetError {
    fn from(err: chrono::ParseError) -> Self {
        CompetVetError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompetVetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CompetVetError::cache_connection("test").code(), "E001");
        assert_eq!(CompetVetError::database_config("test").code(), "E003");
        assert_eq!(CompetVetError::validation("test").code(), "E007");
        assert_eq!(CompetVetError::authentication("test").code(), "E012");
        assert_eq!(CompetVetError::conflict("test").code(), "E014");
        assert_eq!(CompetVetError::invalid_state("test").code(), "E015");
    }

    #[test]
    fn test_db_error_maps_to_database_operation() {
        let err: CompetVetError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CompetVetError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            CompetVetError::validation("test").error_type(),
            "Validation Error"
        );
        assert_eq!(
            CompetVetError::invalid_state("test").error_type(),
            "Invalid State Transition"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CompetVetError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CompetVetError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
