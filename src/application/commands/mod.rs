//! 应用层 - 命令
//!
//! 处理所有产生副作用的用例

mod subtitle_commands;
mod synthesis_commands;
mod template_commands;

pub mod handlers;

pub use subtitle_commands::*;
pub use synthesis_commands::*;
pub use template_commands::*;
