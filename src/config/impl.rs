use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("COMPETVET")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "cache.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?
            .set_override_option("cache.default_ttl", std::env::var("REDIS_TTL").ok())?
            .set_override_option("grading.default_k1", std::env::var("GRADE_K1").ok())?
            .set_override_option("grading.default_k2", std::env::var("GRADE_K2").ok())?;

        Self::from_config(builder.build()?)
    }

    /// 从已构建的配置源反序列化，并补全派生字段
    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        if !(0..=100).contains(&app_config.grading.default_cert_percent) {
            return Err(ConfigError::Message(format!(
                "grading.default_cert_percent must be within 0..=100, got {}",
                app_config.grading.default_cert_percent
            )));
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
[app]
system_name = "CompetVet"
environment = "development"
log_level = "info"

[server]
host = "127.0.0.1"
port = 8080
unix_socket_path = ""
workers = 0
max_workers = 2

[server.timeouts]
client_request = 5000
client_disconnect = 1000
keep_alive = 30

[server.limits]
max_payload_size = 1048576

[jwt]
secret = "test"
access_token_expiry = 15
refresh_token_expiry = 7
refresh_token_remember_me_expiry = 30

[argon2]
memory_cost = 19456
time_cost = 2
parallelism = 1

[database]
url = "sqlite::memory:"
pool_size = 1
timeout = 5

[cache]
type = "moka"
default_ttl = 60

[cache.redis]
url = "redis://127.0.0.1/"
key_prefix = "competvet:"
pool_size = 4

[cache.memory]
max_capacity = 100

[cors]
allowed_origins = []
allowed_methods = []
allowed_headers = []
max_age = 3600

[grading]
default_k1 = 1
default_k2 = 1
default_cert_percent = 80
default_eval_num = 3
default_autoeval_num = 1
"#;

    fn parse(raw: &str) -> Result<AppConfig, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()?;
        AppConfig::from_config(config)
    }

    #[test]
    fn test_workers_fallback_to_cpu_count() {
        let config = parse(SAMPLE).expect("sample config should load");
        assert!(config.server.workers >= 1);
        assert!(config.server.workers <= 2);
    }

    #[test]
    fn test_bind_address_and_environment() {
        let config = parse(SAMPLE).expect("sample config should load");
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_unix_socket_is_none() {
        let config = parse(SAMPLE).expect("sample config should load");
        assert!(config.unix_socket_path().is_none());
    }

    #[test]
    fn test_cert_percent_out_of_range_rejected() {
        let raw = SAMPLE.replace("default_cert_percent = 80", "default_cert_percent = 120");
        assert!(parse(&raw).is_err());
    }
}
