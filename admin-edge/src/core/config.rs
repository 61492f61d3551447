use admin_client::ClientConfig;

/// Edge 服务配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (存在时按天滚动写文件) |
/// | MAX_CONNECTIONS | 256 | 最大并发请求数 |
///
/// Session 相关的 `ADMIN_TOKEN_FILE` 等由 [`ClientConfig::from_env`] 读取。
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 ADMIN_TOKEN_FILE=/tmp/session.json cargo run -p admin-edge
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// 最大并发请求数
    pub max_connections: usize,
    /// Token 存储位置等客户端配置
    pub client: ClientConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            max_connections: std::env::var("MAX_CONNECTIONS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(256),
            client: ClientConfig::from_env(),
        }
    }

    /// 使用自定义端口和客户端配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(http_port: u16, client: ClientConfig) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.client = client;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
