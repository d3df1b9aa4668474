//! SSML Builder
//!
//! 将 SRT 字幕转换为带停顿、时长与语言标注的 SSML 文档

use quick_xml::escape::escape;

use super::english::tag_english;
use crate::domain::subtitle::{parse_srt, SubtitleCue, SubtitleError};

/// SSML 命名空间
pub const SSML_NAMESPACE: &str = "http://www.w3.org/2001/10/synthesis";
/// Microsoft 扩展命名空间（mstts）
pub const MSTTS_NAMESPACE: &str = "http://www.w3.org/2001/mstts";
/// 默认文档语言
pub const DEFAULT_LANGUAGE: &str = "zh-CN";
/// 默认音色
pub const DEFAULT_VOICE: &str = "zh-CN-XiaoxiaoNeural";

/// SSML 构建参数
#[derive(Debug, Clone)]
pub struct SsmlOptions {
    /// `<voice name="...">`
    pub voice_name: String,
    /// 根元素 `xml:lang`
    pub language: String,
}

impl Default for SsmlOptions {
    fn default() -> Self {
        Self {
            voice_name: DEFAULT_VOICE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl SsmlOptions {
    pub fn new(voice_name: impl Into<String>) -> Self {
        Self {
            voice_name: voice_name.into(),
            ..Default::default()
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// 计算与上一条字幕之间的停顿（毫秒）
///
/// 第一条字幕没有停顿；字幕重叠时停顿截断为 0。
pub fn break_before(previous: Option<&SubtitleCue>, current: &SubtitleCue) -> Option<u64> {
    let previous = previous?;
    if current.start_ms < previous.end_ms {
        tracing::warn!(
            index = current.index,
            overlap_ms = previous.end_ms - current.start_ms,
            "Overlapping cues, break clamped to 0ms"
        );
    }
    Some(current.start_ms.saturating_sub(previous.end_ms))
}

/// 将已解析的字幕构建为 SSML 文档
///
/// 相同输入总是产生逐字节相同的输出。
pub fn build_ssml(cues: &[SubtitleCue], options: &SsmlOptions) -> String {
    let voice_open = format!("<voice name=\"{}\">", escape(options.voice_name.as_str()));
    let mut ssml = format!(
        "<speak version=\"1.0\" xmlns=\"{}\" xmlns:mstts=\"{}\" xml:lang=\"{}\">",
        SSML_NAMESPACE,
        MSTTS_NAMESPACE,
        escape(options.language.as_str())
    );

    let mut previous: Option<&SubtitleCue> = None;
    for cue in cues {
        ssml.push_str(&voice_open);
        if let Some(break_ms) = break_before(previous, cue) {
            ssml.push_str(&format!("<break time=\"{}ms\"/>", break_ms));
        }
        ssml.push_str(&format!(
            "<mstts:express-as type=\"general\" mstts:audioduration=\"{}\">",
            cue.duration_ms()
        ));
        ssml.push_str(&tag_english(&cue.text));
        ssml.push_str("</mstts:express-as></voice>");
        previous = Some(cue);
    }

    ssml.push_str("</speak>");
    ssml
}

/// 解析 SRT 文本并构建 SSML 文档
pub fn convert_srt_to_ssml(srt_text: &str, options: &SsmlOptions) -> Result<String, SubtitleError> {
    let cues = parse_srt(srt_text)?;
    tracing::debug!(cues = cues.len(), voice = %options.voice_name, "Building SSML");
    Ok(build_ssml(&cues, options))
}
