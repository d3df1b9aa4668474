//! Synthesis Commands - 语音合成命令

use std::path::PathBuf;
use std::time::Duration;

use crate::application::ports::SpeechRequest;

/// 重试策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// 最大尝试次数（至少 1 次）
    pub max_retries: u32,
    /// 两次尝试之间的等待时间
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, retry_delay: Duration) -> Self {
        Self {
            max_retries,
            retry_delay,
        }
    }

    /// 实际尝试次数，0 视为 1
    pub fn attempts(&self) -> u32 {
        self.max_retries.max(1)
    }
}

/// 合成并保存一段语音
#[derive(Debug, Clone)]
pub struct SynthesizeSpeech {
    pub request: SpeechRequest,
    /// 输出文件名（不含扩展名）
    pub file_stem: String,
}

/// 单次尝试的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptResult {
    /// 音频已写入
    Success(PathBuf),
    /// 可重试的失败（服务取消或调用异常）
    Retryable(String),
    /// 不可重试的失败
    Fatal(String),
}

/// 请求的最终状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisStatus {
    Succeeded { path: PathBuf },
    Exhausted { last_error: String },
    Failed { reason: String },
}

/// 单个请求的处理报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisReport {
    pub voice_name: String,
    pub file_stem: String,
    /// 实际发起的尝试次数
    pub attempts: u32,
    pub status: SynthesisStatus,
}

impl SynthesisReport {
    pub fn is_success(&self) -> bool {
        matches!(self.status, SynthesisStatus::Succeeded { .. })
    }

    pub fn output_path(&self) -> Option<&PathBuf> {
        match &self.status {
            SynthesisStatus::Succeeded { path } => Some(path),
            _ => None,
        }
    }
}
