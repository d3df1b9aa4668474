//! Synthesis Command Handler - 带重试的语音合成
//!
//! 状态流转: Pending -> Attempting -> {Succeeded | Retrying -> Attempting | Exhausted}

use std::path::Path;
use std::sync::Arc;

use crate::application::commands::{
    AttemptResult, RetryPolicy, SynthesisReport, SynthesisStatus, SynthesizeSpeech,
};
use crate::application::ports::{
    AudioStoragePort, CancellationReason, SpeechError, SpeechRequest, SpeechSynthesizerPort,
    SynthesisOutcome,
};

/// SynthesizeSpeech Handler
///
/// 每个请求独立处理：重试耗尽只影响当前请求，不会中止调用方的批处理。
pub struct SynthesizeHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    storage: Arc<dyn AudioStoragePort>,
    policy: RetryPolicy,
}

impl SynthesizeHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        storage: Arc<dyn AudioStoragePort>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            synthesizer,
            storage,
            policy,
        }
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub async fn handle(&self, command: SynthesizeSpeech) -> SynthesisReport {
        let SynthesizeSpeech { request, file_stem } = command;
        let max_attempts = self.policy.attempts();

        let report = |attempts, status| SynthesisReport {
            voice_name: request.voice_name.clone(),
            file_stem: file_stem.clone(),
            attempts,
            status,
        };

        let path = match self.storage.audio_path(&file_stem) {
            Ok(path) => path,
            Err(e) => {
                tracing::error!(file_stem = %file_stem, error = %e, "Invalid output path");
                return report(0, SynthesisStatus::Failed { reason: e.to_string() });
            }
        };

        let mut last_error = String::new();
        for attempt in 1..=max_attempts {
            tracing::debug!(
                voice = %request.voice_name,
                payload = request.payload.kind(),
                attempt,
                max_attempts,
                "Attempting speech synthesis"
            );

            match self.attempt(&request, &path).await {
                AttemptResult::Success(path) => {
                    tracing::info!(
                        voice = %request.voice_name,
                        path = %path.display(),
                        attempt,
                        "Speech synthesized"
                    );
                    return report(attempt, SynthesisStatus::Succeeded { path });
                }
                AttemptResult::Fatal(reason) => {
                    tracing::error!(voice = %request.voice_name, error = %reason, "Speech synthesis failed");
                    return report(attempt, SynthesisStatus::Failed { reason });
                }
                AttemptResult::Retryable(reason) => {
                    if attempt < max_attempts {
                        tracing::warn!(
                            voice = %request.voice_name,
                            error = %reason,
                            "An error occurred, retrying in {}s",
                            self.policy.retry_delay.as_secs_f32()
                        );
                        tokio::time::sleep(self.policy.retry_delay).await;
                    } else {
                        tracing::warn!(voice = %request.voice_name, error = %reason, "An error occurred");
                    }
                    last_error = reason;
                }
            }
        }

        tracing::error!(
            voice = %request.voice_name,
            "Failed to synthesize voice {} after {} attempts",
            request.voice_name,
            max_attempts
        );
        report(max_attempts, SynthesisStatus::Exhausted { last_error })
    }

    /// 单次尝试：调用合成服务并对结果分类
    async fn attempt(&self, request: &SpeechRequest, path: &Path) -> AttemptResult {
        match self.synthesizer.synthesize(request).await {
            Ok(SynthesisOutcome::Completed { audio_data }) => {
                match self.storage.save_audio(path, &audio_data).await {
                    Ok(()) => AttemptResult::Success(path.to_path_buf()),
                    Err(e) => AttemptResult::Fatal(e.to_string()),
                }
            }
            Ok(SynthesisOutcome::Canceled {
                reason,
                error_details,
            }) => {
                tracing::warn!(voice = %request.voice_name, reason = %reason, "Speech synthesis canceled");
                match (reason, error_details) {
                    (CancellationReason::Error, Some(details)) => {
                        tracing::warn!(error_details = %details, "Cancellation error details");
                        AttemptResult::Retryable(details)
                    }
                    (reason, _) => AttemptResult::Retryable(format!("canceled: {}", reason)),
                }
            }
            Err(SpeechError::Configuration(msg)) => AttemptResult::Fatal(msg),
            Err(e) => AttemptResult::Retryable(e.to_string()),
        }
    }
}
