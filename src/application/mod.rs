//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、AudioStorage、VoiceCatalog）
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{ConvertSubtitleHandler, GenerateVoiceTemplatesHandler, SynthesizeHandler},
    AttemptResult, ConvertSubtitle, ConvertSubtitleResponse, GenerateVoiceTemplates, RetryPolicy,
    SynthesisReport, SynthesisStatus, SynthesizeSpeech, TemplateBatchReport,
};

pub use error::ApplicationError;

pub use ports::{
    AudioStorageError, AudioStoragePort, CancellationReason, CatalogError, SpeechError,
    SpeechPayload, SpeechRequest, SpeechSynthesizerPort, SynthesisOutcome, VoiceCatalogPort,
};
