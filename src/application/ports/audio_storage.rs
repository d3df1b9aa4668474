//! Audio Storage Port - 出站端口
//!
//! 定义合成音频文件写入的抽象接口

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),
}

/// Audio Storage Port
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 输出目录
    fn output_dir(&self) -> &Path;

    /// 获取音频文件路径：`{output_dir}/{file_stem}.wav`
    fn audio_path(&self, file_stem: &str) -> Result<PathBuf, AudioStorageError>;

    /// 写入音频数据（覆盖已有文件）
    async fn save_audio(&self, path: &Path, data: &[u8]) -> Result<(), AudioStorageError>;
}
