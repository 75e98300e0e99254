use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 键存在但取值失败（连接错误、反序列化失败等）
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(v) => Some(v),
            _ => None,
        }
    }
}

/// 对象缓存后端
///
/// 值统一以字符串（JSON）存储，类型化读写见 [`super::get_json`] / [`super::insert_json`]。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为 0 时使用后端的默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}
