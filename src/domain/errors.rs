//! Domain Errors
//!
//! 输入数据格式错误，不可重试，直接返回给调用方

use thiserror::Error;

/// 格式错误（时间码 / 音色目录行）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Invalid timecode '{0}': expected HH:MM:SS,mmm")]
    Timecode(String),

    #[error("Timecode field out of range: '{0}'")]
    TimecodeRange(String),

    #[error("Invalid voice catalog line '{0}': expected Name（Gender）")]
    CatalogLine(String),

    #[error("Unknown gender label '{label}' in catalog line '{line}'")]
    GenderLabel { line: String, label: String },
}
