//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ssml::{DEFAULT_LANGUAGE, DEFAULT_VOICE};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 语音服务订阅密钥（通常放在 .secrets.toml）
    #[serde(default)]
    pub subscription_key: String,

    /// 语音服务区域
    #[serde(default)]
    pub service_region: String,

    /// 语音合成配置
    #[serde(default)]
    pub speech: SpeechConfig,

    /// 重试配置
    #[serde(default)]
    pub retry: RetryConfig,

    /// 音色样例配置
    #[serde(default)]
    pub template: TemplateConfig,

    /// 字幕转换配置
    #[serde(default)]
    pub convert: ConvertConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 语音合成配置
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// 完整接口地址，未设置时按 service_region 生成
    #[serde(default)]
    pub endpoint: Option<String>,

    /// 合成语言
    #[serde(default = "default_language")]
    pub language: String,

    /// 目录音色名前缀
    #[serde(default = "default_language")]
    pub voice_locale: String,

    /// 字幕转换默认音色
    #[serde(default = "default_voice")]
    pub default_voice: String,

    /// 音频输出格式
    #[serde(default = "default_output_format")]
    pub output_format: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_speech_timeout")]
    pub timeout_secs: u64,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

fn default_output_format() -> String {
    "riff-24khz-16bit-mono-pcm".to_string()
}

fn default_speech_timeout() -> u64 {
    60
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            language: default_language(),
            voice_locale: default_language(),
            default_voice: default_voice(),
            output_format: default_output_format(),
            timeout_secs: default_speech_timeout(),
        }
    }
}

/// 重试配置
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// 每个请求的最大尝试次数
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// 重试间隔（秒）
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    5
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

impl RetryConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }
}

/// 音色样例配置
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    /// 音色目录文件
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// 样例输出目录
    #[serde(default = "default_template_dir")]
    pub output_dir: PathBuf,

    /// 样例文本
    #[serde(default = "default_sample_text")]
    pub sample_text: String,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("voice_names.txt")
}

fn default_template_dir() -> PathBuf {
    PathBuf::from("template")
}

fn default_sample_text() -> String {
    "这是一个示例文本，用于演示文本到语音的转换。".to_string()
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            output_dir: default_template_dir(),
            sample_text: default_sample_text(),
        }
    }
}

/// 字幕转换配置
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    /// 音频输出目录
    #[serde(default = "default_convert_dir")]
    pub output_dir: PathBuf,

    /// 音频文件名（不含扩展名）
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_convert_dir() -> PathBuf {
    PathBuf::from("Output")
}

fn default_file_name() -> String {
    "synthesized_audio".to_string()
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            output_dir: default_convert_dir(),
            file_name: default_file_name(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.subscription_key.is_empty());
        assert_eq!(config.speech.language, "zh-CN");
        assert_eq!(config.speech.voice_locale, "zh-CN");
        assert_eq!(config.speech.default_voice, "zh-CN-XiaoxiaoNeural");
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.template.catalog_path, PathBuf::from("voice_names.txt"));
        assert_eq!(config.template.output_dir, PathBuf::from("template"));
        assert_eq!(config.convert.output_dir, PathBuf::from("Output"));
        assert_eq!(config.convert.file_name, "synthesized_audio");
    }

    #[test]
    fn test_retry_delay() {
        let config = RetryConfig::default();
        assert_eq!(config.retry_delay(), Duration::from_secs(5));
    }
}
