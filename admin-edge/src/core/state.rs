use admin_client::Session;

use crate::core::Config;

/// 服务器状态
///
/// `session` 与 CLI 共用同一个 token 存储，路由守卫和登录接口都读写它。
#[derive(Debug, Clone)]
pub struct ServerState {
    pub config: Config,
    pub session: Session,
}

impl ServerState {
    pub fn new(config: Config, session: Session) -> Self {
        Self { config, session }
    }

    /// 按配置构建 session (文件存储，或无 HOME 时的 detached 存储)
    pub fn initialize(config: &Config) -> Self {
        let session = config.client.build_session();
        if config.client.token_path.is_none() {
            tracing::warn!("No token file configured; logins will not persist");
        }
        Self::new(config.clone(), session)
    }
}
