use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::RouteGuideError;
use crate::storage::DatasetFormat;

/// RouteGuide 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteGuideConfig {
    /// 服务器配置
    pub server: ServerConfig,

    /// 数据集配置
    pub dataset: DatasetConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,

    /// 请求超时时间（秒），0 表示不限制
    #[serde(default)]
    pub timeout: u64,

    /// 每个连接的并发请求上限
    #[serde(default = "default_concurrency_limit")]
    pub concurrency_limit: usize,

    /// 流式响应的缓冲条数
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

/// 数据集配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// 要素数据文件路径
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    /// 文件格式：auto, json, geojson
    #[serde(default = "default_dataset_format")]
    pub format: String,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别：trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 日志输出：stdout, file
    #[serde(default = "default_log_output")]
    pub output: String,

    /// 日志文件路径（当 output = file 时）
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// 默认值函数
// ============================================================================

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    50051
}

fn default_concurrency_limit() -> usize {
    32
}

fn default_channel_capacity() -> usize {
    16
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/route_guide_db.json")
}

fn default_dataset_format() -> String {
    "auto".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_output() -> String {
    "stdout".to_string()
}

// ============================================================================
// 实现
// ============================================================================

impl Default for RouteGuideConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
                timeout: 0,
                concurrency_limit: default_concurrency_limit(),
                channel_capacity: default_channel_capacity(),
            },
            dataset: DatasetConfig {
                path: default_dataset_path(),
                format: default_dataset_format(),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                output: default_log_output(),
                log_file: None,
            },
        }
    }
}

impl RouteGuideConfig {
    /// 从文件加载配置
    ///
    /// 配置加载顺序（优先级从低到高）：
    /// 1. 默认配置（内嵌的 default.toml）
    /// 2. 用户配置文件（可选）
    /// 3. 环境变量（ROUTEGUIDE__ 前缀，使用双下划线分隔嵌套）
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use routeguide::config::RouteGuideConfig;
    ///
    /// // 加载配置（如果文件不存在，使用默认配置）
    /// let config = RouteGuideConfig::from_file("routeguide.toml").unwrap();
    /// ```
    pub fn from_file(path: &str) -> crate::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                include_str!("default.toml"),
                config::FileFormat::Toml,
            ))
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("ROUTEGUIDE").separator("__"))
            .build()
            .map_err(|e| RouteGuideError::Config(format!("Failed to load config: {}", e)))?;

        settings
            .try_deserialize()
            .map_err(|e| RouteGuideError::Config(format!("Failed to parse config: {}", e)))
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &str) -> crate::Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| RouteGuideError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn dataset_format(&self) -> crate::Result<DatasetFormat> {
        self.dataset.format.parse()
    }

    /// 验证配置
    ///
    /// 检查配置的合法性，包括：
    /// - 端口范围
    /// - 流缓冲大小
    /// - 数据集格式
    /// - 日志级别与输出
    pub fn validate(&self) -> crate::Result<()> {
        // 非特权端口
        if self.server.port < 1024 {
            return Err(RouteGuideError::Config(format!(
                "Server port {} is below 1024 (privileged range)",
                self.server.port
            )));
        }

        if self.server.channel_capacity == 0 {
            return Err(RouteGuideError::Config(
                "server.channel_capacity must be greater than 0".to_string(),
            ));
        }

        self.dataset_format()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(RouteGuideError::Config(format!(
                    "Invalid log level: '{}'. Must be one of: trace, debug, info, warn, error",
                    self.logging.level
                )))
            }
        }

        match self.logging.output.as_str() {
            "stdout" => {}
            "file" if self.logging.log_file.is_none() => {
                return Err(RouteGuideError::Config(
                    "Log output is 'file' but log_file path is not specified".to_string(),
                ))
            }
            "file" => {}
            other => {
                return Err(RouteGuideError::Config(format!(
                    "Invalid log output: '{}'. Must be one of: stdout, file",
                    other
                )))
            }
        }

        Ok(())
    }

    /// 打印配置摘要
    pub fn print_summary(&self) {
        println!("📋 RouteGuide Configuration:");
        println!("   Server:      {}:{}", self.server.host, self.server.port);
        println!(
            "   Timeout:     {}",
            if self.server.timeout > 0 {
                format!("{} seconds", self.server.timeout)
            } else {
                "none".to_string()
            }
        );
        println!("   Concurrency: {} per connection", self.server.concurrency_limit);
        println!();
        println!("   Dataset:     {}", self.dataset.path.display());
        println!("   Format:      {}", self.dataset.format);
        println!();
        println!("   Log Level:   {}", self.logging.level);
        println!("   Log Output:  {}", self.logging.output);
        if let Some(ref log_file) = self.logging.log_file {
            println!("   Log File:    {}", log_file.display());
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RouteGuideConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 50051);
        assert_eq!(config.server.timeout, 0);
        assert_eq!(config.dataset.format, "auto");
    }

    #[test]
    fn test_embedded_defaults_match() {
        let config = RouteGuideConfig::from_file("definitely-missing-routeguide").unwrap();
        let defaults = RouteGuideConfig::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.concurrency_limit, defaults.server.concurrency_limit);
        assert_eq!(config.dataset.path, defaults.dataset.path);
        assert_eq!(config.logging.level, defaults.logging.level);
    }

    #[test]
    fn test_config_validation() {
        let mut config = RouteGuideConfig::default();

        // 有效配置
        assert!(config.validate().is_ok());

        // 无效端口
        config.server.port = 80;
        assert!(config.validate().is_err());
        config.server.port = 50051;

        // 无效数据集格式
        config.dataset.format = "csv".to_string();
        assert!(config.validate().is_err());
        config.dataset.format = "geojson".to_string();
        assert!(config.validate().is_ok());

        // 无效日志级别
        config.logging.level = "invalid".to_string();
        assert!(config.validate().is_err());
        config.logging.level = "debug".to_string();

        // file 输出缺少路径
        config.logging.output = "file".to_string();
        assert!(config.validate().is_err());
        config.logging.log_file = Some(PathBuf::from("logs/routeguide.log"));
        assert!(config.validate().is_ok());

        config.server.channel_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routeguide.toml");
        let path = path.to_str().unwrap();

        let mut config = RouteGuideConfig::default();
        config.server.port = 10000;
        config.dataset.format = "json".to_string();

        // 保存
        config.save_to_file(path).unwrap();

        // 加载
        let loaded = RouteGuideConfig::from_file(path).unwrap();
        assert_eq!(loaded.server.port, 10000);
        assert_eq!(loaded.dataset.format, "json");
        assert_eq!(loaded.dataset_format().unwrap(), DatasetFormat::Json);
    }
}
