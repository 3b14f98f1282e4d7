use std::path::PathBuf;

use clap::Parser;
use routeguide::config::LoggingConfig;
use routeguide::storage::{load_features, FeatureStore};
use routeguide::{GrpcServer, Result, RouteGuideConfig, RouteGuideError, RouteGuideService};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 配置文件路径
    #[arg(short, long, default_value = "routeguide.toml")]
    config: String,

    /// 生成默认配置文件并退出
    #[arg(long)]
    generate_config: bool,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Feature database path (overrides config file)
    #[arg(long = "db-path", alias = "db_path")]
    db_path: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 生成默认配置文件
    if args.generate_config {
        let config = RouteGuideConfig::default();
        config.save_to_file(&args.config)?;
        println!("✅ Generated default configuration: {}", args.config);
        println!("📝 You can edit this file and restart the server.");
        return Ok(());
    }

    // 加载配置
    let mut config = RouteGuideConfig::from_file(&args.config)?;

    // 命令行参数覆盖配置文件
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(db_path) = args.db_path {
        config.dataset.path = db_path;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }

    config.validate()?;

    init_logging(&config.logging)?;

    info!("🚀 Starting RouteGuide server...");
    info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    config.print_summary();

    // 数据集加载失败直接退出，不开始服务
    let features = load_features(&config.dataset.path, config.dataset_format()?).await?;
    let store = FeatureStore::from_features(features);
    info!(
        "🗺️  {} features loaded ({} named)",
        store.len(),
        store.named_count()
    );

    let service = RouteGuideService::new(store);
    let server = GrpcServer::new(config.server.clone(), service);
    server.start().await?;

    Ok(())
}

/// 初始化日志系统
fn init_logging(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    match (config.output.as_str(), &config.log_file) {
        ("file", Some(log_file)) => {
            // 确保日志目录存在
            if let Some(parent) = log_file.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;

            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .try_init()
                .map_err(|e| RouteGuideError::Config(format!("Failed to init logging: {}", e)))?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(tracing_subscriber::fmt::layer().with_target(false))
                .with(tracing_subscriber::filter::LevelFilter::from_level(filter))
                .try_init()
                .map_err(|e| RouteGuideError::Config(format!("Failed to init logging: {}", e)))?;
        }
    }

    Ok(())
}
