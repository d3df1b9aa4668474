//! SRT Parser
//!
//! 按空行切分字幕块：序号行、时间轴行、若干文本行

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::timecode::timecode_to_ms;
use crate::domain::errors::FormatError;

static TIMING_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\S+)\s+-->\s+(\S+)$").expect("timing line pattern is valid")
});

/// 字幕解析错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubtitleError {
    #[error("Block {block}: invalid cue index '{line}'")]
    InvalidIndex { block: usize, line: String },

    #[error("Block {block}: missing timing line")]
    MissingTiming { block: usize },

    #[error("Block {block}: invalid timing line '{line}'")]
    InvalidTiming { block: usize, line: String },

    #[error("Block {block}: {source}")]
    Timecode {
        block: usize,
        #[source]
        source: FormatError,
    },
}

/// 单条字幕
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleCue {
    /// 序号（来自文件，不做连续性校验）
    pub index: u32,
    /// 开始时间（毫秒）
    pub start_ms: u64,
    /// 结束时间（毫秒）
    pub end_ms: u64,
    /// 字幕文本，多行以空格连接
    pub text: String,
}

impl SubtitleCue {
    /// 字幕时长（毫秒），结束早于开始时为 0
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// 解析 SRT 文本，按文件顺序返回字幕
///
/// 字幕块之间缺少空行时，文本中出现的「序号行 + 时间轴行」开始新的字幕块。
pub fn parse_srt(input: &str) -> Result<Vec<SubtitleCue>, SubtitleError> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut block_no = 0;

    for line in input.lines().map(str::trim) {
        if line.is_empty() {
            if !block.is_empty() {
                block_no += 1;
                cues.push(parse_block(block_no, &block)?);
                block.clear();
            }
            continue;
        }
        if starts_next_block(&block, line) {
            if let Some(index_line) = block.pop() {
                block_no += 1;
                cues.push(parse_block(block_no, &block)?);
                block.clear();
                block.push(index_line);
            }
        }
        block.push(line);
    }
    if !block.is_empty() {
        block_no += 1;
        cues.push(parse_block(block_no, &block)?);
    }

    Ok(cues)
}

/// 当前块已有文本行，且上一行全为数字、本行为时间轴行
fn starts_next_block(block: &[&str], line: &str) -> bool {
    block.len() >= 3
        && block
            .last()
            .is_some_and(|prev| prev.bytes().all(|b| b.is_ascii_digit()))
        && TIMING_LINE.is_match(line)
}

fn parse_block(block_no: usize, lines: &[&str]) -> Result<SubtitleCue, SubtitleError> {
    let index_line = lines[0];
    let index: u32 = index_line
        .parse()
        .map_err(|_| SubtitleError::InvalidIndex {
            block: block_no,
            line: index_line.to_string(),
        })?;

    let timing_line = lines
        .get(1)
        .ok_or(SubtitleError::MissingTiming { block: block_no })?;
    let caps = TIMING_LINE
        .captures(timing_line)
        .ok_or_else(|| SubtitleError::InvalidTiming {
            block: block_no,
            line: timing_line.to_string(),
        })?;

    let to_ms = |s: &str| {
        timecode_to_ms(s).map_err(|source| SubtitleError::Timecode {
            block: block_no,
            source,
        })
    };
    let start_ms = to_ms(&caps[1])?;
    let end_ms = to_ms(&caps[2])?;

    Ok(SubtitleCue {
        index,
        start_ms,
        end_ms,
        text: lines[2..].join(" "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "
1
00:00:00,000 --> 00:00:04,300
大家好,我们现在来进行 X-Agent 项目的环境搭建

2
00:00:06,300 --> 00:00:10,400
第一步首先是安装项目所需要用到的 Docker Compose
";

    #[test]
    fn test_parse_sample() {
        let cues = parse_srt(SAMPLE).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].index, 1);
        assert_eq!(cues[0].start_ms, 0);
        assert_eq!(cues[0].end_ms, 4300);
        assert_eq!(cues[0].duration_ms(), 4300);
        assert_eq!(cues[1].start_ms, 6300);
        assert_eq!(cues[1].end_ms, 10400);
        assert_eq!(
            cues[1].text,
            "第一步首先是安装项目所需要用到的 Docker Compose"
        );
    }

    #[test]
    fn test_crlf_bom_and_multiline_text() {
        let input = "\u{feff}1\r\n00:00:01,000 --> 00:00:02,500\r\nfirst line\r\nsecond line\r\n\r\n";
        let cues = parse_srt(input).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "first line second line");
        assert_eq!(cues[0].duration_ms(), 1500);
    }

    #[test]
    fn test_blocks_without_blank_separator() {
        let input = "1\n00:00:00,000 --> 00:00:04,300\n大家好 X-Agent\n2\n00:00:06,300 --> 00:00:10,400\n安装 Docker\n";
        let cues = parse_srt(input).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "大家好 X-Agent");
        assert_eq!(cues[1].index, 2);
        assert_eq!(cues[1].start_ms, 6300);
        assert_eq!(cues[1].end_ms, 10400);
        assert_eq!(cues[1].text, "安装 Docker");
    }

    #[test]
    fn test_digit_caption_line_kept_as_text() {
        let cues = parse_srt("1\n00:00:00,000 --> 00:00:01,000\n2024\n年\n").unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "2024 年");
    }

    #[test]
    fn test_cue_without_text() {
        let cues = parse_srt("3\n00:00:01,000 --> 00:00:02,000\n").unwrap();
        assert_eq!(cues[0].text, "");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_srt("").unwrap().is_empty());
        assert!(parse_srt("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_index() {
        let err = parse_srt("abc\n00:00:01,000 --> 00:00:02,000\nhi").unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidIndex { block: 1, .. }));
    }

    #[test]
    fn test_missing_and_invalid_timing() {
        assert_eq!(
            parse_srt("1\n").unwrap_err(),
            SubtitleError::MissingTiming { block: 1 }
        );
        let err = parse_srt("1\n00:00:01,000 to 00:00:02,000\nhi").unwrap_err();
        assert!(matches!(err, SubtitleError::InvalidTiming { block: 1, .. }));
    }

    #[test]
    fn test_malformed_timecode_surfaces_format_error() {
        let input = "1\n00:00:00,000 --> 00:00:01,000\nok\n\n2\n4,300 --> 00:00:05,000\nbad";
        let err = parse_srt(input).unwrap_err();
        assert_eq!(
            err,
            SubtitleError::Timecode {
                block: 2,
                source: FormatError::Timecode("4,300".to_string()),
            }
        );
    }
}
