use crate::domain::model::TargetMetrics;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self, domain: &str) -> Result<TargetMetrics>;
}
