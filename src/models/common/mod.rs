pub mod pagination;
pub mod response;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use response::ApiResponse;

/// 为单元枚举生成 `as_str`、`Display` 与 `FromStr`，字符串即数据库中保存的值
macro_rules! impl_str_enum {
    ($ty:ident { $($variant:ident => $s:literal),* $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $s,)*
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok($ty::$variant),)*
                    _ => Err(format!("Invalid {}: {s}", stringify!($ty))),
                }
            }
        }
    };
}

pub(crate) use impl_str_enum;
