use crate::core::report::{fetching_banner, render_report};
use crate::domain::model::TargetMetrics;
use crate::domain::ports::MetricsSource;
use crate::utils::error::Result;
use std::io::Write;

pub struct MetricsRunner<S: MetricsSource> {
    source: S,
}

impl<S: MetricsSource> MetricsRunner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn run<W: Write>(&self, domain: &str, out: &mut W) -> Result<TargetMetrics> {
        writeln!(out, "{}", fetching_banner(domain))?;

        let metrics = self.source.fetch(domain).await?;
        tracing::info!("Received metrics for {}", metrics.target);

        write!(out, "{}", render_report(&metrics))?;
        out.flush()?;

        Ok(metrics)
    }
}
