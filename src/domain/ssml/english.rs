//! 英文片段标注
//!
//! 中文旁白中的拉丁字母单词用 `<lang xml:lang="en-US">` 包裹，按英文发音

use once_cell::sync::Lazy;
use quick_xml::escape::escape;
use regex::Regex;

/// 英文单词：连续字母或连字符，两侧为单词边界
static ENGLISH_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z-]+\b").expect("english word pattern is valid"));

/// 英文片段的语言标记
pub const ENGLISH_LANG: &str = "en-US";

/// 标注英文片段并转义其余文本
///
/// 输入必须是原始文本（未加任何标记），否则已有的标签名也会被匹配。
/// 单词之间的文本做 XML 转义，输出可直接嵌入 SSML。
pub fn tag_english(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;

    for m in ENGLISH_WORD.find_iter(text) {
        out.push_str(&escape(&text[last..m.start()]));
        out.push_str("<lang xml:lang=\"");
        out.push_str(ENGLISH_LANG);
        out.push_str("\">");
        out.push_str(m.as_str());
        out.push_str("</lang>");
        last = m.end();
    }
    out.push_str(&escape(&text[last..]));

    out
}
