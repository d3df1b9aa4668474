//! SSML - 语音合成标记生成

mod builder;
mod english;

pub use builder::{
    break_before, build_ssml, convert_srt_to_ssml, SsmlOptions, DEFAULT_LANGUAGE, DEFAULT_VOICE,
    MSTTS_NAMESPACE, SSML_NAMESPACE,
};
pub use english::{tag_english, ENGLISH_LANG};
