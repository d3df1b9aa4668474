//! Template Commands - 音色样例批量生成

use super::SynthesisReport;

/// 为目录中的每个音色合成一段样例语音
#[derive(Debug, Clone)]
pub struct GenerateVoiceTemplates {
    /// 样例文本
    pub sample_text: String,
    /// 音色名前缀（如 `zh-CN`）
    pub voice_locale: String,
}

/// 批量生成结果
#[derive(Debug, Clone, Default)]
pub struct TemplateBatchReport {
    pub reports: Vec<SynthesisReport>,
}

impl TemplateBatchReport {
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }
}
