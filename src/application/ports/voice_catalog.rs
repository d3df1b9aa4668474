//! Voice Catalog Port - 音色目录

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{FormatError, VoiceDescriptor};

/// 音色目录错误
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// Voice Catalog Port
#[async_trait]
pub trait VoiceCatalogPort: Send + Sync {
    /// 目录不存在时写入默认列表
    ///
    /// 返回是否新建了目录文件
    async fn ensure_exists(&self) -> Result<bool, CatalogError>;

    /// 确保目录存在后读取并解析全部音色
    async fn load(&self) -> Result<Vec<VoiceDescriptor>, CatalogError>;
}
