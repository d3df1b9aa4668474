//! Voice - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::errors::FormatError;

/// 目录行中的左右括号（全角）
const OPEN_PAREN: char = '（';
const CLOSE_PAREN: char = '）';

/// 性别标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderTag {
    /// 女
    Female,
    /// 男
    Male,
    /// 童
    Child,
}

impl GenderTag {
    /// 规范化单个性别标注：`女性` -> `女`，`儿童` -> `童`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "女" | "女性" => Some(Self::Female),
            "男" | "男性" => Some(Self::Male),
            "童" | "儿童" => Some(Self::Child),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "女",
            Self::Male => "男",
            Self::Child => "童",
        }
    }
}

impl std::fmt::Display for GenderTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 音色描述
///
/// 由目录行 `Name（GenderLabel）` 解析得到，读取后不再修改。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    name: String,
    gender: GenderTag,
}

impl VoiceDescriptor {
    pub fn new(name: impl Into<String>, gender: GenderTag) -> Self {
        Self {
            name: name.into(),
            gender,
        }
    }

    /// 解析目录行
    ///
    /// 标注可包含多个以逗号分隔的标签（如 `女性，儿童`），
    /// 其中含 `童` 时取 `童`，否则取第一个标签。
    pub fn parse(line: &str) -> Result<Self, FormatError> {
        let line = line.trim();
        let malformed = || FormatError::CatalogLine(line.to_string());

        let (name, rest) = line.rsplit_once(OPEN_PAREN).ok_or_else(malformed)?;
        let label = rest.strip_suffix(CLOSE_PAREN).ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() || label.trim().is_empty() {
            return Err(malformed());
        }

        let mut tags = Vec::new();
        for part in label.split(['，', ',']) {
            let tag = GenderTag::from_label(part).ok_or_else(|| FormatError::GenderLabel {
                line: line.to_string(),
                label: part.trim().to_string(),
            })?;
            tags.push(tag);
        }

        let gender = if tags.contains(&GenderTag::Child) {
            GenderTag::Child
        } else {
            tags[0]
        };

        Ok(Self::new(name, gender))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> GenderTag {
        self.gender
    }

    /// 完整音色名：`{locale}-{name}`，如 `zh-CN-XiaoxiaoNeural`
    pub fn qualified_name(&self, locale: &str) -> String {
        format!("{}-{}", locale, self.name)
    }

    /// 样例音频文件名（不含扩展名）：`{name}_{gender}`
    pub fn file_stem(&self) -> String {
        format!("{}_{}", self.name, self.gender)
    }
}

impl std::fmt::Display for VoiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}{}", self.name, OPEN_PAREN, self.gender, CLOSE_PAREN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let voice = VoiceDescriptor::parse("XiaoxiaoNeural（女）").unwrap();
        assert_eq!(voice.name(), "XiaoxiaoNeural");
        assert_eq!(voice.gender(), GenderTag::Female);
        assert_eq!(voice.qualified_name("zh-CN"), "zh-CN-XiaoxiaoNeural");
        assert_eq!(voice.file_stem(), "XiaoxiaoNeural_女");
    }

    #[test]
    fn test_child_label_normalized() {
        let voice = VoiceDescriptor::parse("XiaoshuangNeural（女性，儿童）").unwrap();
        assert_eq!(voice.gender(), GenderTag::Child);
        assert_eq!(voice.file_stem(), "XiaoshuangNeural_童");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let voice = VoiceDescriptor::parse("  YunxiNeural（男） ").unwrap();
        assert_eq!(voice.name(), "YunxiNeural");
        assert_eq!(voice.gender(), GenderTag::Male);
    }

    #[test]
    fn test_missing_delimiter() {
        assert_eq!(
            VoiceDescriptor::parse("XiaoxiaoNeural"),
            Err(FormatError::CatalogLine("XiaoxiaoNeural".to_string()))
        );
        assert!(VoiceDescriptor::parse("XiaoxiaoNeural（女").is_err());
        assert!(VoiceDescriptor::parse("XiaoxiaoNeural(女)").is_err());
        assert!(VoiceDescriptor::parse("（女）").is_err());
    }

    #[test]
    fn test_unknown_label() {
        assert!(matches!(
            VoiceDescriptor::parse("RobotNeural（机器）"),
            Err(FormatError::GenderLabel { .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        let voice = VoiceDescriptor::new("YunjianNeural", GenderTag::Male);
        assert_eq!(voice.to_string(), "YunjianNeural（男）");
        assert_eq!(VoiceDescriptor::parse(&voice.to_string()).unwrap(), voice);
    }
}
