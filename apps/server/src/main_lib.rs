use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fintrack_ai::{ChatService, CompletionClient, CompletionSettings, OpenAiCompatibleClient};
use fintrack_core::{
    budgets::{BudgetService, BudgetServiceTrait},
    categories::{CategoryService, CategoryServiceTrait},
    dashboard::{DashboardService, DashboardServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    transactions::{TransactionService, TransactionServiceTrait},
    users::{UserService, UserServiceTrait},
};
use fintrack_storage_sqlite::{
    self as storage, BudgetRepository, CategoryRepository, GoalRepository, TransactionRepository,
    UserRepository,
};

use crate::{auth::AuthManager, config::Config, error::set_dev_errors};

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait + Send + Sync>,
    pub transaction_service: Arc<dyn TransactionServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub dashboard_service: Arc<dyn DashboardServiceTrait + Send + Sync>,
    pub chat_service: Arc<ChatService>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the database, wires repositories into services and builds the
/// completion client used by the AI routes.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let ai_client: Arc<dyn CompletionClient> = Arc::new(OpenAiCompatibleClient::new(
        Some(config.ai.base_url.clone()),
        config.ai.api_key.clone(),
        config.ai.timeout,
    )?);
    build_state_with_client(config, ai_client).await
}

pub async fn build_state_with_client(
    config: &Config,
    ai_client: Arc<dyn CompletionClient>,
) -> anyhow::Result<Arc<AppState>> {
    set_dev_errors(config.dev_errors);

    let (pool, writer) = storage::open(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let category_repository = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let transaction_repository =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let budget_repository = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let goal_repository = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));

    let user_service = Arc::new(UserService::new(user_repository));
    let transaction_service = Arc::new(TransactionService::new(
        transaction_repository.clone(),
        category_repository.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(
        category_repository.clone(),
        transaction_repository.clone(),
    ));
    let budget_service = Arc::new(BudgetService::new(
        budget_repository,
        transaction_repository.clone(),
        category_repository,
    ));
    let goal_service = Arc::new(GoalService::new(goal_repository));
    let dashboard_service = Arc::new(DashboardService::new(transaction_repository));

    if config.ai.api_key.is_none() {
        tracing::warn!("FT_AI_API_KEY is not set; AI chat requests will fail");
    }
    let chat_service = Arc::new(ChatService::new(
        ai_client,
        CompletionSettings {
            model: config.ai.model.clone(),
            ..CompletionSettings::default()
        },
    ));

    let auth = Arc::new(AuthManager::new(&config.jwt_secret, config.token_ttl));

    Ok(Arc::new(AppState {
        user_service,
        transaction_service,
        category_service,
        budget_service,
        goal_service,
        dashboard_service,
        chat_service,
        auth,
    }))
}
