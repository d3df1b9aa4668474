//! Fake TTS Client - 用于测试的合成客户端
//!
//! 按预设脚本依次返回结果，脚本用完后重复最后一个结果，不调用任何服务

use async_trait::async_trait;
use std::sync::Mutex;

use crate::application::ports::{SpeechError, SpeechRequest, SpeechSynthesizerPort, SynthesisOutcome};

type ScriptedResult = Result<SynthesisOutcome, SpeechError>;

/// Fake TTS Client
///
/// 记录收到的全部请求，便于断言调用次数与参数
pub struct FakeTtsClient {
    script: Mutex<Vec<ScriptedResult>>,
    requests: Mutex<Vec<SpeechRequest>>,
}

impl FakeTtsClient {
    /// 按顺序返回 `results`
    pub fn scripted(results: Vec<ScriptedResult>) -> Self {
        let mut script = results;
        script.reverse();
        Self {
            script: Mutex::new(script),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 始终返回同一结果
    pub fn always(outcome: SynthesisOutcome) -> Self {
        Self::scripted(vec![Ok(outcome)])
    }

    /// 始终返回同一错误
    pub fn always_err(error: SpeechError) -> Self {
        Self::scripted(vec![Err(error)])
    }

    /// 已收到的请求数
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// 已收到的请求
    pub fn requests(&self) -> Vec<SpeechRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesisOutcome, SpeechError> {
        tracing::debug!(
            voice = %request.voice_name,
            payload = request.payload.kind(),
            "FakeTtsClient: returning scripted result"
        );

        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        let mut script = self
            .script
            .lock()
            .map_err(|_| SpeechError::InvalidResponse("fake script poisoned".to_string()))?;
        match script.len() {
            0 => Err(SpeechError::InvalidResponse("fake script is empty".to_string())),
            1 => script[0].clone(),
            _ => script.pop().unwrap_or_else(|| Err(SpeechError::Timeout)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::SpeechPayload;

    fn request() -> SpeechRequest {
        SpeechRequest {
            voice_name: "zh-CN-XiaoxiaoNeural".to_string(),
            language: "zh-CN".to_string(),
            payload: SpeechPayload::Text("测试".to_string()),
        }
    }

    #[tokio::test]
    async fn test_script_order_and_last_repeats() {
        let fake = FakeTtsClient::scripted(vec![
            Err(SpeechError::Timeout),
            Ok(SynthesisOutcome::Completed { audio_data: vec![7] }),
        ]);

        assert!(matches!(fake.synthesize(&request()).await, Err(SpeechError::Timeout)));
        for _ in 0..2 {
            assert!(matches!(
                fake.synthesize(&request()).await,
                Ok(SynthesisOutcome::Completed { .. })
            ));
        }
        assert_eq!(fake.call_count(), 3);
    }
}
