//! Domain Layer - 领域层
//!
//! 纯函数逻辑，不做任何 I/O:
//! - subtitle: SRT 解析与时间码
//! - ssml: SSML 生成与英文片段标注
//! - voice: 音色目录

pub mod errors;
pub mod ssml;
pub mod subtitle;
pub mod voice;

pub use errors::FormatError;
pub use ssml::{convert_srt_to_ssml, SsmlOptions};
pub use subtitle::{parse_srt, timecode_to_ms, SubtitleCue, SubtitleError};
pub use voice::{GenderTag, VoiceDescriptor};
