use seo_metrics::utils::{logger, validation::Validate};
use seo_metrics::{AhrefsClient, CliConfig, MetricsError, MetricsRunner};

fn fail(e: MetricsError) -> ! {
    tracing::debug!("❌ Run failed: {} (Category: {:?})", e, e.category());
    // 錯誤訊息和報表一樣寫到 stdout
    println!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::from_env_args();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置，缺參數時不發出任何請求
    if let Err(e) = config.validate() {
        fail(e);
    }

    let client = AhrefsClient::with_options(
        config.api_base.clone(),
        config.token(),
        config.fetch_options(),
    );
    let runner = MetricsRunner::new(client);

    let mut stdout = std::io::stdout();
    match runner.run(config.domain(), &mut stdout).await {
        Ok(metrics) => {
            tracing::debug!("✅ Metrics printed for {}", metrics.target);
        }
        Err(e) => fail(e),
    }
}
