pub mod ai_config;
pub mod app_config;
pub mod cloudinary_config;
pub mod cors_config;
pub mod database_config;
pub mod jwt_config;
pub mod server_config;
pub mod upload_config;
