//! Subvox - SRT 字幕转 SSML 语音合成工具
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Subtitle: SRT 解析、时间码换算
//! - SSML: 英文片段标注、SSML 文档生成
//! - Voice: 音色描述与默认音色目录
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesizer, AudioStorage, VoiceCatalog）
//! - Commands: 命令及处理器（字幕转换、带重试的语音合成、音色样例）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Azure TTS Client, Fake TTS Client, 音频文件存储, 音色目录文件

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
