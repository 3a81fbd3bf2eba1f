use crate::application::{GenerateRoast, RoastService, StackService, VoteService};
use crate::config::AppConfig;
use crate::infrastructure::db::{
    create_connection, db_error, run_migrations, RoastRepository, StackRepository,
    VoteRepository,
};
use crate::infrastructure::security::{CostTracker, RateLimiter};
use sea_orm::DatabaseConnection;
use stack_roast_errors::AppError;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub stacks: StackService,
    pub roasts: RoastService,
    pub votes: VoteService,
    pub generate_roast: Arc<GenerateRoast>,
    pub rate_limiter: RateLimiter,
    pub cost_tracker: Arc<CostTracker>,
}

impl AppContext {
    pub fn new(config: &AppConfig, db: DatabaseConnection) -> Self {
        Self::with_generator(config, db, GenerateRoast::from_config(config))
    }

    pub fn with_generator(
        config: &AppConfig,
        db: DatabaseConnection,
        generate_roast: GenerateRoast,
    ) -> Self {
        let stack_repo = StackRepository::new(db.clone());
        let roast_repo = RoastRepository::new(db.clone());
        let vote_repo = VoteRepository::new(db);

        Self {
            stacks: StackService::new(stack_repo.clone(), roast_repo.clone()),
            roasts: RoastService::new(stack_repo, roast_repo.clone()),
            votes: VoteService::new(roast_repo, vote_repo),
            generate_roast: Arc::new(generate_roast),
            rate_limiter: RateLimiter::from_limits(&config.ai_limits),
            cost_tracker: Arc::new(CostTracker::new(config.ai_limits.daily_requests)),
        }
    }

    /// Connects to the configured database and applies the schema if enabled.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        let db = create_connection(&config.database_url, config.database_max_connections)
            .await
            .map_err(db_error)?;
        if config.run_migrations {
            run_migrations(&db).await.map_err(db_error)?;
        }
        tracing::info!("Database connected");
        Ok(Self::new(config, db))
    }

    /// Applies the per-client rate limit and the daily budget for one AI call.
    pub fn check_ai_quota(&self, client: &str) -> Result<(), AppError> {
        self.generate_roast.ensure_configured()?;
        self.rate_limiter.check_rate_limit(client)?;
        self.cost_tracker.check_and_increment()?;
        Ok(())
    }
}
