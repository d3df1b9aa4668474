//! Template Command Handlers - 音色样例批量合成

use std::sync::Arc;

use crate::application::commands::handlers::SynthesizeHandler;
use crate::application::commands::{GenerateVoiceTemplates, SynthesizeSpeech, TemplateBatchReport};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechPayload, SpeechRequest, VoiceCatalogPort};

/// GenerateVoiceTemplates Handler
pub struct GenerateVoiceTemplatesHandler {
    catalog: Arc<dyn VoiceCatalogPort>,
    synthesizer: SynthesizeHandler,
    language: String,
}

impl GenerateVoiceTemplatesHandler {
    pub fn new(
        catalog: Arc<dyn VoiceCatalogPort>,
        synthesizer: SynthesizeHandler,
        language: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            synthesizer,
            language: language.into(),
        }
    }

    /// 逐个音色顺序合成；单个音色失败不影响后续音色
    pub async fn handle(
        &self,
        command: GenerateVoiceTemplates,
    ) -> Result<TemplateBatchReport, ApplicationError> {
        if command.sample_text.trim().is_empty() {
            return Err(ApplicationError::validation("Sample text cannot be empty"));
        }

        let voices = self.catalog.load().await?;
        tracing::info!(voices = voices.len(), "Generating voice templates");

        let mut batch = TemplateBatchReport::default();
        for voice in &voices {
            let report = self
                .synthesizer
                .handle(SynthesizeSpeech {
                    request: SpeechRequest {
                        voice_name: voice.qualified_name(&command.voice_locale),
                        language: self.language.clone(),
                        payload: SpeechPayload::Text(command.sample_text.clone()),
                    },
                    file_stem: voice.file_stem(),
                })
                .await;
            batch.reports.push(report);
        }

        tracing::info!(
            total = batch.reports.len(),
            succeeded = batch.succeeded(),
            failed = batch.failed(),
            "Voice template generation finished"
        );

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::RetryPolicy;
    use crate::application::ports::{SpeechError, SynthesisOutcome};
    use crate::infrastructure::adapters::{FakeTtsClient, FileAudioStorage, FileVoiceCatalog};
    use std::time::Duration;
    use tempfile::tempdir;

    fn command() -> GenerateVoiceTemplates {
        GenerateVoiceTemplates {
            sample_text: "这是一个示例文本。".to_string(),
            voice_locale: "zh-CN".to_string(),
        }
    }

    #[tokio::test]
    async fn test_one_file_per_voice() {
        let temp_dir = tempdir().unwrap();
        let catalog_path = temp_dir.path().join("voice_names.txt");
        std::fs::write(&catalog_path, "XiaoxiaoNeural（女）\nXiaoyouNeural（女性，儿童）\n").unwrap();

        let storage = Arc::new(FileAudioStorage::new(temp_dir.path().join("template")).await.unwrap());
        let fake = Arc::new(FakeTtsClient::always(SynthesisOutcome::Completed {
            audio_data: b"RIFF".to_vec(),
        }));
        let synthesizer = SynthesizeHandler::new(fake.clone(), storage, RetryPolicy::new(3, Duration::ZERO));
        let handler = GenerateVoiceTemplatesHandler::new(
            Arc::new(FileVoiceCatalog::new(&catalog_path)),
            synthesizer,
            "zh-CN",
        );

        let batch = handler.handle(command()).await.unwrap();

        assert_eq!(batch.succeeded(), 2);
        assert!(temp_dir.path().join("template/XiaoxiaoNeural_女.wav").exists());
        assert!(temp_dir.path().join("template/XiaoyouNeural_童.wav").exists());

        let voices: Vec<String> = fake.requests().into_iter().map(|r| r.voice_name).collect();
        assert_eq!(voices, vec!["zh-CN-XiaoxiaoNeural", "zh-CN-XiaoyouNeural"]);
    }

    #[tokio::test]
    async fn test_exhausted_voice_does_not_abort_batch() {
        let temp_dir = tempdir().unwrap();
        let catalog_path = temp_dir.path().join("voice_names.txt");
        std::fs::write(&catalog_path, "YunxiNeural（男）\nYunjianNeural（男）\n").unwrap();

        let storage = Arc::new(FileAudioStorage::new(temp_dir.path()).await.unwrap());
        let fake = Arc::new(FakeTtsClient::scripted(vec![
            Err(SpeechError::NetworkError("connection reset".to_string())),
            Err(SpeechError::Timeout),
            Ok(SynthesisOutcome::Completed {
                audio_data: vec![0; 4],
            }),
        ]));
        let synthesizer = SynthesizeHandler::new(fake.clone(), storage, RetryPolicy::new(2, Duration::ZERO));
        let handler = GenerateVoiceTemplatesHandler::new(
            Arc::new(FileVoiceCatalog::new(&catalog_path)),
            synthesizer,
            "zh-CN",
        );

        let batch = handler.handle(command()).await.unwrap();

        assert_eq!(batch.reports.len(), 2);
        assert!(!batch.reports[0].is_success());
        assert_eq!(batch.reports[0].attempts, 2);
        assert!(batch.reports[1].is_success());
        assert_eq!(batch.failed(), 1);
        assert_eq!(fake.call_count(), 3);
    }

    #[tokio::test]
    async fn test_malformed_catalog_is_reported() {
        let temp_dir = tempdir().unwrap();
        let catalog_path = temp_dir.path().join("voice_names.txt");
        std::fs::write(&catalog_path, "NoDelimiterHere\n").unwrap();

        let storage = Arc::new(FileAudioStorage::new(temp_dir.path()).await.unwrap());
        let fake = Arc::new(FakeTtsClient::always(SynthesisOutcome::Completed {
            audio_data: vec![0],
        }));
        let synthesizer = SynthesizeHandler::new(fake.clone(), storage, RetryPolicy::default());
        let handler = GenerateVoiceTemplatesHandler::new(
            Arc::new(FileVoiceCatalog::new(&catalog_path)),
            synthesizer,
            "zh-CN",
        );

        let result = handler.handle(command()).await;
        assert!(matches!(result, Err(ApplicationError::Catalog(_))));
        assert_eq!(fake.call_count(), 0);
    }
}
