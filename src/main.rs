use clap::Parser;
use prompt_describe::utils::{logger, validation::Validate};
use prompt_describe::{CliConfig, DescribeEngine, LineSink, LineSource, SimplePipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting prompt-describe CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建來源、輸出與管道
    let source = match &config.input {
        Some(path) => LineSource::file(path.clone()),
        None => LineSource::stdin(),
    };
    let sink = match &config.output {
        Some(path) => LineSink::file(path.clone()),
        None => LineSink::stdout(),
    };
    let pipeline = SimplePipeline::new(source, sink, config.clone());

    // 創建描述引擎並運行
    let engine = DescribeEngine::new(pipeline);

    match engine.run().await {
        Ok(description) => {
            tracing::info!("✅ Element described successfully");
            if let Some(path) = &config.output {
                tracing::info!("📁 Result saved to: {}", path);
            }
            tracing::debug!("Description: {}", description);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Describe process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                prompt_describe::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                prompt_describe::utils::error::ErrorSeverity::Medium => 2, // 重試錯誤
                prompt_describe::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                prompt_describe::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
