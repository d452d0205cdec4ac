pub mod load;
pub mod tool_paths;
pub mod types;

pub use types::{CaptureKind, CapturePattern, CapturePatternTable, Config, RenameJob, ToolPaths};
