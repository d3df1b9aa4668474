//! Catalog Adapter - 音色目录文件

mod file_voice_catalog;

pub use file_voice_catalog::FileVoiceCatalog;
