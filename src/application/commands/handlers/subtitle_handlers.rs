//! Subtitle Command Handlers

use crate::application::commands::handlers::SynthesizeHandler;
use crate::application::commands::{ConvertSubtitle, ConvertSubtitleResponse, SynthesizeSpeech};
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechPayload, SpeechRequest};
use crate::domain::ssml::{build_ssml, SsmlOptions};
use crate::domain::subtitle::parse_srt;

/// ConvertSubtitle Handler
///
/// SRT -> SSML，设置了合成器时可将 SSML 合成为音频
pub struct ConvertSubtitleHandler {
    defaults: SsmlOptions,
    synthesizer: Option<SynthesizeHandler>,
}

impl ConvertSubtitleHandler {
    pub fn new(defaults: SsmlOptions) -> Self {
        Self {
            defaults,
            synthesizer: None,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: SynthesizeHandler) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }

    pub async fn handle(
        &self,
        command: ConvertSubtitle,
    ) -> Result<ConvertSubtitleResponse, ApplicationError> {
        let cues = parse_srt(&command.srt_text)?;

        let mut options = self.defaults.clone();
        if let Some(voice_name) = command.voice_name {
            if voice_name.trim().is_empty() {
                return Err(ApplicationError::validation("Voice name cannot be empty"));
            }
            options.voice_name = voice_name;
        }

        let ssml = build_ssml(&cues, &options);
        tracing::info!(
            cues = cues.len(),
            voice = %options.voice_name,
            ssml_len = ssml.len(),
            "Subtitle converted to SSML"
        );

        let synthesis = match command.synthesize_to {
            None => None,
            Some(file_stem) => {
                let synthesizer = self.synthesizer.as_ref().ok_or_else(|| {
                    ApplicationError::validation("Synthesis requested but no synthesizer configured")
                })?;
                let report = synthesizer
                    .handle(SynthesizeSpeech {
                        request: SpeechRequest {
                            voice_name: options.voice_name.clone(),
                            language: options.language.clone(),
                            payload: SpeechPayload::Ssml(ssml.clone()),
                        },
                        file_stem,
                    })
                    .await;
                Some(report)
            }
        };

        Ok(ConvertSubtitleResponse {
            ssml,
            cue_count: cues.len(),
            synthesis,
        })
    }
}
