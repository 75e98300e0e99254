//! 缓存层
//!
//! 后端以插件方式注册（见 [`register`]），启动时按 `cache.type` 选择，Redis 不可用时回退到 Moka。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

use serde::{Serialize, de::DeserializeOwned};

/// 声明并在程序加载时注册一个缓存插件
///
/// 类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::CompetVetError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

/// 读取并反序列化缓存值，反序列化失败时删除该键
pub async fn get_json<T: DeserializeOwned>(cache: &dyn ObjectCache, key: &str) -> Option<T> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str::<T>(&json) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::info!("Dropping undecodable cache entry {}: {}", key, e);
                cache.remove(key).await;
                None
            }
        },
        _ => None,
    }
}

/// 序列化后写入缓存
pub async fn insert_json<T: Serialize>(cache: &dyn ObjectCache, key: String, value: &T, ttl: u64) {
    match serde_json::to_string(value) {
        Ok(json) => cache.insert_raw(key, json, ttl).await,
        Err(e) => tracing::warn!("Failed to serialize cache entry {}: {}", key, e),
    }
}

/// 用户在情境中的角色缓存键
pub fn situation_roles_key(situation_id: i64, user_id: i64) -> String {
    format!("situation_roles:{situation_id}:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_result_into_option() {
        assert_eq!(CacheResult::Found(3).into_option(), Some(3));
        assert_eq!(CacheResult::<i32>::NotFound.into_option(), None);
        assert_eq!(CacheResult::<i32>::ExistsButNoValue.into_option(), None);
    }

    #[test]
    fn test_situation_roles_key() {
        assert_eq!(situation_roles_key(4, 9), "situation_roles:4:9");
    }
}
