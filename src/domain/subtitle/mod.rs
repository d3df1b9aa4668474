//! Subtitle - SRT 字幕解析
//!
//! - timecode: 时间码 -> 毫秒
//! - parser: 字幕块 -> SubtitleCue

mod parser;
mod timecode;

pub use parser::{parse_srt, SubtitleCue, SubtitleError};
pub use timecode::timecode_to_ms;
