//! SRT 时间码转换
//!
//! `HH:MM:SS,mmm` -> 毫秒偏移

use crate::domain::errors::FormatError;

/// 时间码长度：`HH:MM:SS,mmm`
const TIMECODE_LEN: usize = 12;

/// 将 SRT 时间码解析为毫秒
///
/// 每个字段固定宽度十进制；小时按字面值计算（不对 24 取模），
/// 分钟与秒必须小于 60。
pub fn timecode_to_ms(timecode: &str) -> Result<u64, FormatError> {
    let bytes = timecode.as_bytes();
    if bytes.len() != TIMECODE_LEN
        || bytes[2] != b':'
        || bytes[5] != b':'
        || bytes[8] != b','
    {
        return Err(FormatError::Timecode(timecode.to_string()));
    }

    let field = |range: std::ops::Range<usize>| -> Result<u64, FormatError> {
        let digits = &bytes[range];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(FormatError::Timecode(timecode.to_string()));
        }
        Ok(digits
            .iter()
            .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0')))
    };

    let hours = field(0..2)?;
    let minutes = field(3..5)?;
    let seconds = field(6..8)?;
    let millis = field(9..12)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(FormatError::TimecodeRange(timecode.to_string()));
    }

    Ok(((hours * 60 + minutes) * 60 + seconds) * 1000 + millis)
}
