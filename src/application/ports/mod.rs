//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_storage;
mod speech_synthesizer;
mod voice_catalog;

pub use audio_storage::{AudioStorageError, AudioStoragePort};
pub use speech_synthesizer::{
    CancellationReason, SpeechError, SpeechPayload, SpeechRequest, SpeechSynthesizerPort,
    SynthesisOutcome,
};
pub use voice_catalog::{CatalogError, VoiceCatalogPort};
