//! 相機檔案依拍攝時間重新命名元件
//!
//! 掃描未整理資料夾，依拍攝時間搬移到 `yyyy-MM` 子資料夾並重新命名

mod destination_planner;
mod main;
mod metadata_extractor;
mod relocator;

pub use destination_planner::{DestinationPlan, plan_destination};
pub use main::{CaptureRenamer, RunOutcome, display_summary};
pub use metadata_extractor::{
    CaptureTimestamp, ExifExtractor, FfprobeExtractor, MetadataExtractor, extractor_for,
};
pub use relocator::{RelocationOutcome, relocate};
