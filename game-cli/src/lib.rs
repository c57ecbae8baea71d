//! 棋类游戏命令行前端
//!
//! 包含:
//! - 用户设置
//! - 文本棋盘渲染
//! - 命令解析
//! - 对局循环

pub mod app;
pub mod command;
pub mod render;
pub mod settings;

pub use app::{select_variant, App};
pub use command::{Command, CommandError};
pub use render::{render, RenderOptions};
pub use settings::Settings;
