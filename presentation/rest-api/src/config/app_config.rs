use super::{
    ai_config::AiConfig, cors_config, jwt_config::JwtConfig, server_config::ServerConfig,
    upload_config::UploadConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub jwt: JwtConfig,
    pub ai: AiConfig,
    pub upload: UploadConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            jwt: JwtConfig::from_env()?,
            ai: AiConfig::from_env(),
            upload: UploadConfig::from_env()?,
        })
    }
}
