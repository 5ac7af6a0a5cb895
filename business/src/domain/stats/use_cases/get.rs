use async_trait::async_trait;

use crate::domain::stats::errors::StatsError;
use crate::domain::stats::model::Stats;

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Stats, StatsError>;
}
