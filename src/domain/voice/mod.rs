//! Voice Context - 音色目录
//!
//! 职责:
//! - 目录行解析与性别标签规范化
//! - 内置默认音色列表

mod catalog;
mod value_objects;

pub use catalog::{default_catalog_text, parse_catalog, DEFAULT_VOICE_CATALOG};
pub use value_objects::{GenderTag, VoiceDescriptor};
