//! Command Handlers

mod subtitle_handlers;
mod synthesis_handlers;
mod template_handlers;

pub use subtitle_handlers::ConvertSubtitleHandler;
pub use synthesis_handlers::SynthesizeHandler;
pub use template_handlers::GenerateVoiceTemplatesHandler;
