//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};

/// 输出音频扩展名
const AUDIO_EXTENSION: &str = "wav";

/// 文件系统音频存储
pub struct FileAudioStorage {
    /// 输出目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储，输出目录不存在时创建
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn output_dir(&self) -> &Path {
        &self.base_dir
    }

    fn audio_path(&self, file_stem: &str) -> Result<PathBuf, AudioStorageError> {
        if file_stem.trim().is_empty()
            || file_stem.contains(['/', '\\'])
            || file_stem == "."
            || file_stem == ".."
        {
            return Err(AudioStorageError::InvalidFileName(file_stem.to_string()));
        }
        Ok(self
            .base_dir
            .join(format!("{}.{}", file_stem, AUDIO_EXTENSION)))
    }

    async fn save_audio(&self, path: &Path, data: &[u8]) -> Result<(), AudioStorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        }

        fs::write(path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), size = data.len(), "Saved audio");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_creates_output_dir() {
        let temp_dir = tempdir().unwrap();
        let dir = temp_dir.path().join("Output");
        let storage = FileAudioStorage::new(&dir).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(storage.output_dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_save_audio() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let path = storage.audio_path("XiaoxiaoNeural_女").unwrap();
        assert_eq!(path, temp_dir.path().join("XiaoxiaoNeural_女.wav"));

        storage.save_audio(&path, b"fake wav data").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"fake wav data");

        // 覆盖写入
        storage.save_audio(&path, b"new").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_rejects_path_like_stems() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        assert!(storage.audio_path("").is_err());
        assert!(storage.audio_path("../escape").is_err());
        assert!(storage.audio_path("a\\b").is_err());
        assert!(storage.audio_path("..").is_err());
    }
}
