//! 默认音色目录
//!
//! 目录文件不存在时写入此列表，顺序固定

use super::VoiceDescriptor;
use crate::domain::errors::FormatError;

/// 默认音色目录（每行一个 `Name（GenderLabel）`）
pub const DEFAULT_VOICE_CATALOG: &[&str] = &[
    "XiaoxiaoNeural（女）",
    "YunxiNeural（男）",
    "YunjianNeural（男）",
    "XiaoyiNeural（女）",
    "YunyangNeural（男）",
    "XiaochenNeural（女）",
    "XiaohanNeural（女）",
    "XiaomengNeural（女）",
    "XiaomoNeural（女）",
    "XiaoqiNeural（女）",
    "XiaoruNeural（女）",
    "XiaoshuangNeural（女性，儿童）",
    "XiaoxuanNeural（女）",
    "XiaoyanNeural（女）",
    "XiaoyouNeural（女性，儿童）",
    "XiaozhenNeural（女）",
    "YunfengNeural（男）",
    "YunhaoNeural（男）",
    "YunxiaNeural（男）",
    "YunyeNeural（男）",
    "YunzeNeural（男）",
    "XiaorouNeural1（女）",
    "YunjieNeural1（男）",
];

/// 默认目录的文件内容，每行以 `\n` 结尾
pub fn default_catalog_text() -> String {
    DEFAULT_VOICE_CATALOG
        .iter()
        .map(|line| format!("{}\n", line))
        .collect()
}

/// 解析目录文本：去除首尾空白，跳过空行
pub fn parse_catalog(text: &str) -> Result<Vec<VoiceDescriptor>, FormatError> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(VoiceDescriptor::parse)
        .collect()
}
