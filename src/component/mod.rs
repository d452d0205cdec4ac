//! 功能元件模組
//!
//! 每個子模組實現一個獨立的功能，包含主要邏輯和專用工具

pub mod capture_renamer;
pub mod retry_group_resolver;

pub use capture_renamer::CaptureRenamer;
pub use retry_group_resolver::RetryGroupResolver;
