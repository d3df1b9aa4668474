//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 密钥文件（.secrets.toml）
//! 3. 配置文件（settings.toml）
//! 4. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 默认配置文件
const SETTINGS_FILE: &str = "settings.toml";
/// 默认密钥文件
const SECRETS_FILE: &str = ".secrets.toml";
/// 环境变量前缀
const ENV_PREFIX: &str = "SUBVOX";

/// 加载应用配置
///
/// # 环境变量示例
/// - `SUBVOX_SUBSCRIPTION_KEY=...`
/// - `SUBVOX_SERVICE_REGION=eastasia`
/// - `SUBVOX_RETRY__MAX_RETRIES=5`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，为 None 时读取当前目录的 settings.toml；
///   密钥文件总是从配置文件所在目录读取
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 配置文件
    let secrets_path = match config_path {
        Some(path) => {
            builder = builder.add_source(File::from(path).required(true));
            path.with_file_name(SECRETS_FILE)
        }
        None => {
            builder = builder.add_source(File::from(Path::new(SETTINGS_FILE)).required(false));
            Path::new(SECRETS_FILE).to_path_buf()
        }
    };

    // 2. 密钥文件覆盖配置文件
    builder = builder.add_source(File::from(secrets_path.as_path()).required(false));

    // 3. 环境变量（最高优先级）
    // 前缀: SUBVOX_
    // 层级分隔符: __ (双下划线)
    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    // 缺省字段由 serde default 补齐
    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 凭据只在创建合成客户端时检查，仅做字幕转换时不需要
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.retry.max_retries == 0 {
        return Err(ConfigError::ValidationError(
            "retry.max_retries must be at least 1".to_string(),
        ));
    }

    if config.speech.language.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "speech.language cannot be empty".to_string(),
        ));
    }

    if config.speech.default_voice.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "speech.default_voice cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志），不输出密钥
pub fn print_config(config: &AppConfig) {
    tracing::debug!("=== Application Configuration ===");
    tracing::debug!(
        "Subscription key: {}",
        if config.subscription_key.is_empty() { "<unset>" } else { "<set>" }
    );
    tracing::debug!("Service region: {}", config.service_region);
    if let Some(endpoint) = &config.speech.endpoint {
        tracing::debug!("Endpoint: {}", endpoint);
    }
    tracing::debug!("Language: {}", config.speech.language);
    tracing::debug!("Default voice: {}", config.speech.default_voice);
    tracing::debug!("Output format: {}", config.speech.output_format);
    tracing::debug!(
        "Retry: {} attempts, {}s delay",
        config.retry.max_retries,
        config.retry.retry_delay_secs
    );
    tracing::debug!("Voice catalog: {:?}", config.template.catalog_path);
    tracing::debug!("Template directory: {:?}", config.template.output_dir);
    tracing::debug!("Convert directory: {:?}", config.convert.output_dir);
    tracing::debug!("Log level: {}", config.log.level);
    tracing::debug!("=================================");
}
