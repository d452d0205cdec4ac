//! 重試群組解析元件
//!
//! 找出傳輸重試留下的同名檔案，只保留最完整的一份

mod resolver;

pub use resolver::{
    CanonicalName, QUARANTINE_FOLDER, RetryGroup, RetryGroupResolver, RetryResolution,
};
