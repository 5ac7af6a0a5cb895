use std::sync::Arc;

use ai::background_remover::BackgroundRemoverRemoveBg;
use ai::client::{GeminiClient, RemoveBgClient};
use ai::image_synthesizer::{ImageSynthesizerPollinations, POLLINATIONS_BASE_URL};
use ai::prompt_enhancer::PromptEnhancerGemini;
use auth::jwt::JwtTokenService;
use auth::password::Argon2PasswordHasher;
use cloudinary::CloudinaryAssetStore;
use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryPostgres;
use persistence::design::repository::DesignRepositoryPostgres;
use persistence::order::repository::OrderRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::cart::add_custom::AddCustomToCartUseCaseImpl;
use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::design::generate::GenerateDesignUseCaseImpl;
use business::application::design::remove_background::RemoveBackgroundUseCaseImpl;
use business::application::order::attach_payment_slip::AttachPaymentSlipUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_for_user::GetUserOrdersUseCaseImpl;
use business::application::order::update_status::UpdateOrderStatusUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::upload_image::UploadProductImageUseCaseImpl;
use business::application::stats::get::GetStatsUseCaseImpl;
use business::application::user::delete::DeleteUserUseCaseImpl;
use business::application::user::get_all::GetAllUsersUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::update_role::UpdateUserRoleUseCaseImpl;
use business::domain::design::services::{BackgroundRemoverService, PromptEnhancerService};
use business::domain::user::services::TokenService;

use crate::api::auth::routes::AuthApi;
use crate::api::cart::routes::CartApi;
use crate::api::design::routes::DesignApi;
use crate::api::health::routes::HealthApi;
use crate::api::order::routes::OrderApi;
use crate::api::product::routes::ProductApi;
use crate::api::stats::routes::StatsApi;
use crate::api::user::routes::UserApi;
use crate::config::app_config::AppConfig;
use crate::config::cloudinary_config;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub auth_api: AuthApi,
    pub user_api: UserApi,
    pub product_api: ProductApi,
    pub cart_api: CartApi,
    pub order_api: OrderApi,
    pub design_api: DesignApi,
    pub stats_api: StatsApi,
    /// Shared with the access guard through request data.
    pub token_service: Arc<dyn TokenService>,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let cart_repository = Arc::new(CartRepositoryPostgres::new(pool.clone()));
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool.clone()));
        let design_repository = Arc::new(DesignRepositoryPostgres::new(pool));

        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(
            &config.jwt.secret,
            config.jwt.ttl_seconds,
        ));
        let password_hasher = Arc::new(Argon2PasswordHasher::new());
        let asset_store = Arc::new(CloudinaryAssetStore::new(
            cloudinary_config::credentials_from_env()?,
        ));

        let enhancer: Option<Arc<dyn PromptEnhancerService>> =
            match config.ai.gemini_api_key.clone() {
                Some(key) => Some(Arc::new(PromptEnhancerGemini::new(GeminiClient::new(key)))),
                None => {
                    tracing::warn!(target: "PromptPrint -- ", "GEMINI_API_KEY not set, prompt enhancement disabled");
                    None
                }
            };
        let remover: Option<Arc<dyn BackgroundRemoverService>> =
            match config.ai.remove_bg_api_key.clone() {
                Some(key) => Some(Arc::new(BackgroundRemoverRemoveBg::new(RemoveBgClient::new(
                    key,
                )))),
                None => {
                    tracing::warn!(target: "PromptPrint -- ", "REMOVE_BG_API_KEY not set, background removal disabled");
                    None
                }
            };
        let synthesizer = Arc::new(ImageSynthesizerPollinations::new(POLLINATIONS_BASE_URL)?);

        // User use cases
        let user_logger = Arc::new(TracingLogger::new("user"));
        let auth_api = AuthApi::new(
            Arc::new(RegisterUserUseCaseImpl {
                repository: user_repository.clone(),
                password_hasher: password_hasher.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(LoginUseCaseImpl {
                repository: user_repository.clone(),
                password_hasher,
                token_service: token_service.clone(),
                logger: user_logger.clone(),
            }),
        );
        let user_api = UserApi::new(
            Arc::new(GetAllUsersUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(DeleteUserUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger.clone(),
            }),
            Arc::new(UpdateUserRoleUseCaseImpl {
                repository: user_repository.clone(),
                logger: user_logger,
            }),
        );

        // Product use cases
        let product_logger = Arc::new(TracingLogger::new("product"));
        let product_api = ProductApi::new(
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                asset_store: asset_store.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                asset_store: asset_store.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: product_logger.clone(),
            }),
            Arc::new(UploadProductImageUseCaseImpl {
                asset_store: asset_store.clone(),
                logger: product_logger,
            }),
            config.upload.dir.clone(),
        );

        // Cart use cases
        let cart_logger = Arc::new(TracingLogger::new("cart"));
        let cart_api = CartApi::new(
            Arc::new(GetCartUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(AddProductToCartUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(AddCustomToCartUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                asset_store: asset_store.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(UpdateCartQuantityUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(RemoveCartItemUseCaseImpl {
                repository: cart_repository.clone(),
                product_repository: product_repository.clone(),
                logger: cart_logger.clone(),
            }),
            Arc::new(ClearCartUseCaseImpl {
                repository: cart_repository,
                logger: cart_logger,
            }),
        );

        // Order use cases
        let order_logger = Arc::new(TracingLogger::new("order"));
        let order_api = OrderApi::new(
            Arc::new(CreateOrderUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(GetUserOrdersUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(GetAllOrdersUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(UpdateOrderStatusUseCaseImpl {
                repository: order_repository.clone(),
                logger: order_logger.clone(),
            }),
            Arc::new(AttachPaymentSlipUseCaseImpl {
                repository: order_repository.clone(),
                asset_store: asset_store.clone(),
                logger: order_logger,
            }),
            config.upload.dir.clone(),
        );

        // Design use cases
        let design_logger = Arc::new(TracingLogger::new("design"));
        let design_api = DesignApi::new(
            Arc::new(GenerateDesignUseCaseImpl {
                repository: design_repository,
                enhancer,
                synthesizer,
                asset_store: asset_store.clone(),
                logger: design_logger.clone(),
            }),
            Arc::new(RemoveBackgroundUseCaseImpl {
                remover,
                asset_store,
                logger: design_logger,
            }),
        );

        // Stats use cases
        let stats_api = StatsApi::new(Arc::new(GetStatsUseCaseImpl {
            user_repository,
            order_repository,
            product_repository,
            logger: Arc::new(TracingLogger::new("stats")),
        }));

        Ok(Self {
            health_api,
            auth_api,
            user_api,
            product_api,
            cart_api,
            order_api,
            design_api,
            stats_api,
            token_service,
        })
    }
}
