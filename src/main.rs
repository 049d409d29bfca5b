use clap::Parser;
use course_catalog::utils::{error::CatalogError, logger, validation::Validate};
use course_catalog::{source_from_config, start_server, CatalogService, CliConfig};

fn report_fatal(stage: &str, e: &CatalogError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code().max(1));
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 設定檔需在日誌初始化前載入，失敗時只能寫到 stderr
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    };

    logger::init_logger(config.logging.format, config.logging.level.as_deref(), cli.verbose);

    tracing::info!("Starting course-catalog");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        report_fatal("Configuration validation", &e);
    }

    // 載入資料集，任何錯誤都不啟動服務
    let service = match source_from_config(&config.catalog) {
        Ok(source) => match CatalogService::from_source(source.as_ref()).await {
            Ok(service) => service,
            Err(e) => report_fatal("Dataset loading", &e),
        },
        Err(e) => report_fatal("Dataset source setup", &e),
    };

    if let Err(e) = start_server(service, &config).await {
        report_fatal("Server", &e);
    }
}
