//! Speech Synthesizer Port - 语音合成能力抽象
//!
//! 定义外部语音合成服务的接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 调用合成服务时的异常（网络、超时、配置）
#[derive(Debug, Clone, Error)]
pub enum SpeechError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// 合成内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechPayload {
    /// 纯文本，由服务按请求中的音色朗读
    Text(String),
    /// 完整 SSML 文档
    Ssml(String),
}

impl SpeechPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Ssml(_) => "ssml",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) | Self::Ssml(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 单次合成请求
///
/// 音色与语言随每次请求传入，合成服务不保存任何选择状态。
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// 完整音色名（如 `zh-CN-XiaoxiaoNeural`）
    pub voice_name: String,
    /// 合成语言（如 `zh-CN`）
    pub language: String,
    /// 合成内容
    pub payload: SpeechPayload,
}

/// 取消原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancellationReason {
    /// 服务报告错误，附带错误详情
    Error,
    /// 服务结束但没有返回音频
    EndOfStream,
}

impl std::fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "Error"),
            Self::EndOfStream => write!(f, "EndOfStream"),
        }
    }
}

/// 合成结果
#[derive(Debug, Clone)]
pub enum SynthesisOutcome {
    /// 合成完成，附带音频数据（WAV）
    Completed { audio_data: Vec<u8> },
    /// 服务取消了请求
    Canceled {
        reason: CancellationReason,
        error_details: Option<String>,
    },
}

impl SynthesisOutcome {
    pub fn canceled_with_error(details: impl Into<String>) -> Self {
        Self::Canceled {
            reason: CancellationReason::Error,
            error_details: Some(details.into()),
        }
    }
}

/// Speech Synthesizer Port
///
/// 外部语音合成服务的抽象接口
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 提交一次合成请求
    ///
    /// 服务明确取消时返回 `Ok(Canceled)`；调用本身失败时返回 `Err`。
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesisOutcome, SpeechError>;
}
