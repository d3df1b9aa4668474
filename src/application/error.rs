//! 应用层错误定义
//!
//! 统一的命令错误类型

use thiserror::Error;

use crate::application::ports::{AudioStorageError, CatalogError};
use crate::domain::{FormatError, SubtitleError};

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入格式错误
    #[error(transparent)]
    Format(#[from] FormatError),

    /// 字幕结构错误
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// 音色目录错误
    #[error("Voice catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// 存储错误
    #[error("Storage error: {0}")]
    Storage(#[from] AudioStorageError),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
