//! File Voice Catalog - 音色目录文件
//!
//! 实现 VoiceCatalogPort trait：目录文件不存在时写入默认列表，然后读取解析

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{CatalogError, VoiceCatalogPort};
use crate::domain::voice::{default_catalog_text, parse_catalog};
use crate::domain::VoiceDescriptor;

/// 文件系统音色目录（UTF-8，每行一个音色）
pub struct FileVoiceCatalog {
    path: PathBuf,
}

impl FileVoiceCatalog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl VoiceCatalogPort for FileVoiceCatalog {
    async fn ensure_exists(&self) -> Result<bool, CatalogError> {
        let exists = fs::try_exists(&self.path)
            .await
            .map_err(|e| CatalogError::IoError(e.to_string()))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| CatalogError::IoError(e.to_string()))?;
        }

        fs::write(&self.path, default_catalog_text())
            .await
            .map_err(|e| CatalogError::IoError(format!("{}: {}", self.path.display(), e)))?;

        tracing::info!(path = %self.path.display(), "Voice catalog created with default voices");
        Ok(true)
    }

    async fn load(&self) -> Result<Vec<VoiceDescriptor>, CatalogError> {
        self.ensure_exists().await?;

        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::IoError(format!("{}: {}", self.path.display(), e)))?;
        let voices = parse_catalog(&text)?;

        tracing::debug!(path = %self.path.display(), voices = voices.len(), "Voice catalog loaded");
        Ok(voices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::DEFAULT_VOICE_CATALOG;
    use crate::domain::GenderTag;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_bootstrap_writes_default_list() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voice_names.txt");
        let catalog = FileVoiceCatalog::new(&path);

        let voices = catalog.load().await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, DEFAULT_VOICE_CATALOG);
        assert!(written.ends_with('\n'));

        assert_eq!(voices.len(), DEFAULT_VOICE_CATALOG.len());
        assert!(voices.iter().all(|v| matches!(
            v.gender(),
            GenderTag::Female | GenderTag::Male | GenderTag::Child
        )));
        assert_eq!(
            voices.iter().filter(|v| v.gender() == GenderTag::Child).count(),
            2
        );
    }

    #[tokio::test]
    async fn test_existing_catalog_kept() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voice_names.txt");
        std::fs::write(&path, "YunxiNeural（男）\n\n").unwrap();
        let catalog = FileVoiceCatalog::new(&path);

        assert!(!catalog.ensure_exists().await.unwrap());
        let voices = catalog.load().await.unwrap();
        assert_eq!(voices, vec![VoiceDescriptor::new("YunxiNeural", GenderTag::Male)]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "YunxiNeural（男）\n\n");
    }

    #[tokio::test]
    async fn test_ensure_exists_reports_creation_once() {
        let temp_dir = tempdir().unwrap();
        let catalog = FileVoiceCatalog::new(temp_dir.path().join("nested/voices.txt"));

        assert!(catalog.ensure_exists().await.unwrap());
        assert!(!catalog.ensure_exists().await.unwrap());
    }

    #[tokio::test]
    async fn test_malformed_line_is_format_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("voice_names.txt");
        std::fs::write(&path, "XiaoxiaoNeural（女）\nbroken\n").unwrap();

        let result = FileVoiceCatalog::new(&path).load().await;
        assert!(matches!(result, Err(CatalogError::Format(_))));
    }
}
