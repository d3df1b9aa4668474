//! Subtitle Commands - 字幕转换命令

use super::SynthesisReport;

/// 将 SRT 字幕转换为 SSML，可选合成音频
#[derive(Debug, Clone)]
pub struct ConvertSubtitle {
    pub srt_text: String,
    /// 音色，None 时使用默认音色
    pub voice_name: Option<String>,
    /// 合成输出文件名（不含扩展名），None 时只生成 SSML
    pub synthesize_to: Option<String>,
}

/// 字幕转换响应
#[derive(Debug, Clone)]
pub struct ConvertSubtitleResponse {
    pub ssml: String,
    pub cue_count: usize,
    pub synthesis: Option<SynthesisReport>,
}
