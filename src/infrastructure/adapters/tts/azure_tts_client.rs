//! Azure TTS Client - 调用 Azure 语音服务 REST 接口
//!
//! 实现 SpeechSynthesizerPort trait
//!
//! POST https://{region}.tts.speech.microsoft.com/cognitiveservices/v1
//! Request: SSML (application/ssml+xml)
//! Response: 音频二进制（格式由 X-Microsoft-OutputFormat 指定）

use async_trait::async_trait;
use quick_xml::escape::escape;
use reqwest::Client;
use std::time::Duration;

use crate::application::ports::{
    CancellationReason, SpeechError, SpeechPayload, SpeechRequest, SpeechSynthesizerPort,
    SynthesisOutcome,
};
use crate::domain::ssml::SSML_NAMESPACE;

/// 默认输出格式：24kHz 16bit 单声道 WAV
pub const DEFAULT_OUTPUT_FORMAT: &str = "riff-24khz-16bit-mono-pcm";

/// Azure TTS 客户端配置
#[derive(Debug, Clone)]
pub struct AzureTtsClientConfig {
    /// 订阅密钥
    pub subscription_key: String,
    /// 服务区域（如 eastasia）
    pub region: String,
    /// 完整接口地址，设置后忽略 region
    pub endpoint: Option<String>,
    /// 音频输出格式
    pub output_format: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for AzureTtsClientConfig {
    fn default() -> Self {
        Self {
            subscription_key: String::new(),
            region: String::new(),
            endpoint: None,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            timeout_secs: 60,
        }
    }
}

impl AzureTtsClientConfig {
    pub fn new(subscription_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// 获取合成接口 URL
    pub fn synthesis_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.region
            ),
        }
    }
}

/// Azure TTS 客户端
pub struct AzureTtsClient {
    client: Client,
    config: AzureTtsClientConfig,
}

impl AzureTtsClient {
    /// 创建新的 Azure TTS 客户端
    ///
    /// 密钥为空，或者 region 与 endpoint 都未设置时返回配置错误
    pub fn new(config: AzureTtsClientConfig) -> Result<Self, SpeechError> {
        if config.subscription_key.trim().is_empty() {
            return Err(SpeechError::Configuration(
                "subscription_key is not set".to_string(),
            ));
        }
        if config.endpoint.is_none() && config.region.trim().is_empty() {
            return Err(SpeechError::Configuration(
                "service_region is not set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("subvox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SpeechError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }
}

/// 纯文本包装为最小 SSML 文档
pub fn text_to_ssml(text: &str, voice_name: &str, language: &str) -> String {
    format!(
        "<speak version=\"1.0\" xmlns=\"{}\" xml:lang=\"{}\"><voice name=\"{}\">{}</voice></speak>",
        SSML_NAMESPACE,
        escape(language),
        escape(voice_name),
        escape(text)
    )
}

#[async_trait]
impl SpeechSynthesizerPort for AzureTtsClient {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SynthesisOutcome, SpeechError> {
        let body = match &request.payload {
            SpeechPayload::Text(text) => text_to_ssml(text, &request.voice_name, &request.language),
            SpeechPayload::Ssml(ssml) => ssml.clone(),
        };

        let url = self.config.synthesis_url();
        tracing::debug!(
            url = %url,
            voice = %request.voice_name,
            payload = request.payload.kind(),
            body_len = body.len(),
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(&url)
            .header("Ocp-Apim-Subscription-Key", &self.config.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.config.output_format)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SpeechError::Timeout
                } else if e.is_connect() {
                    SpeechError::NetworkError(format!("Cannot connect to speech service: {}", e))
                } else {
                    SpeechError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Ok(SynthesisOutcome::canceled_with_error(format!(
                "HTTP {}: {}",
                status,
                error_text.trim()
            )));
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| SpeechError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        if audio_data.is_empty() {
            return Ok(SynthesisOutcome::Canceled {
                reason: CancellationReason::EndOfStream,
                error_details: None,
            });
        }

        tracing::debug!(
            voice = %request.voice_name,
            audio_size = audio_data.len(),
            "Synthesis completed"
        );

        Ok(SynthesisOutcome::Completed { audio_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AzureTtsClientConfig::default();
        assert_eq!(config.output_format, "riff-24khz-16bit-mono-pcm");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_synthesis_url() {
        let config = AzureTtsClientConfig::new("key", "eastasia");
        assert_eq!(
            config.synthesis_url(),
            "https://eastasia.tts.speech.microsoft.com/cognitiveservices/v1"
        );

        let config = config.with_endpoint("http://localhost:9000/tts").with_timeout(5);
        assert_eq!(config.synthesis_url(), "http://localhost:9000/tts");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        assert!(matches!(
            AzureTtsClient::new(AzureTtsClientConfig::new("", "eastasia")),
            Err(SpeechError::Configuration(_))
        ));
        assert!(matches!(
            AzureTtsClient::new(AzureTtsClientConfig::new("key", " ")),
            Err(SpeechError::Configuration(_))
        ));
        assert!(AzureTtsClient::new(AzureTtsClientConfig::new("key", "eastasia")).is_ok());
    }

    #[test]
    fn test_text_to_ssml_escapes() {
        let ssml = text_to_ssml("a < b", "zh-CN-YunxiNeural", "zh-CN");
        assert_eq!(
            ssml,
            "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"zh-CN\"><voice name=\"zh-CN-YunxiNeural\">a &lt; b</voice></speak>"
        );
    }
}
