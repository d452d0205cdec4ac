//! 命令列介面
//!
//! - `args` - 使用 clap 定義的參數與子命令
//! - `handlers` - 子命令的執行與結果顯示

pub mod args;
pub mod handlers;

pub use args::{Args, Commands, LogLevel, PathArgs};
pub use handlers::run_command;
