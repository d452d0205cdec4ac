use super::metadata_extractor::CaptureTimestamp;
use crate::config::CaptureKind;
use std::path::{Path, PathBuf};

/// 目標位置：`<sorted>/<yyyy-MM>/<時間><副檔名>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationPlan {
    pub directory: PathBuf,
    pub file_name: String,
}

impl DestinationPlan {
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}

/// 依拍攝時間計算目標位置，不做任何檔案操作
#[must_use]
pub fn plan_destination(
    kind: CaptureKind,
    timestamp: &CaptureTimestamp,
    extension: &str,
    sorted_root: &Path,
) -> DestinationPlan {
    let local = timestamp.local();
    DestinationPlan {
        directory: sorted_root.join(local.format("%Y-%m").to_string()),
        file_name: format!("{}{extension}", local.format(kind.filename_format())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    #[test]
    fn test_video_destination() {
        let time = DateTime::parse_from_rfc3339("2024-03-15T10:30:00-07:00").unwrap();
        let plan = plan_destination(
            CaptureKind::Video,
            &CaptureTimestamp::from_fixed_offset(time),
            ".MP4",
            Path::new("/sorted"),
        );
        assert_eq!(plan.directory, PathBuf::from("/sorted/2024-03"));
        assert_eq!(plan.file_name, "2024-03-15 10.30.00.MP4");
        assert_eq!(plan.path(), PathBuf::from("/sorted/2024-03/2024-03-15 10.30.00.MP4"));
    }

    #[test]
    fn test_video_destination_drops_sub_seconds() {
        let timestamp = CaptureTimestamp::from_camera_local(local(2024, 3, 15, 10, 30, 0, 750));
        let plan = plan_destination(CaptureKind::Video, &timestamp, ".MP4", Path::new("/sorted"));
        assert_eq!(plan.file_name, "2024-03-15 10.30.00.MP4");
    }

    #[test]
    fn test_photo_destination_with_milliseconds() {
        let timestamp = CaptureTimestamp::from_camera_local(local(2024, 3, 15, 10, 30, 0, 500));
        let plan = plan_destination(CaptureKind::Photo, &timestamp, ".HIF", Path::new("/sorted"));
        assert_eq!(plan.directory, PathBuf::from("/sorted/2024-03"));
        assert_eq!(plan.file_name, "2024-03-15 10.30.00.500.HIF");
    }

    #[test]
    fn test_photo_destination_zero_milliseconds() {
        let timestamp = CaptureTimestamp::from_camera_local(local(2023, 12, 31, 23, 59, 59, 0));
        let plan = plan_destination(CaptureKind::Photo, &timestamp, ".ARW", Path::new("/sorted"));
        assert_eq!(plan.directory, PathBuf::from("/sorted/2023-12"));
        assert_eq!(plan.file_name, "2023-12-31 23.59.59.000.ARW");
    }

    #[test]
    fn test_file_names_sort_chronologically() {
        let times = [
            local(2024, 3, 15, 9, 5, 7, 0),
            local(2024, 3, 15, 10, 30, 0, 0),
            local(2024, 3, 15, 10, 30, 0, 20),
            local(2024, 3, 15, 10, 30, 0, 500),
            local(2024, 3, 15, 10, 30, 1, 0),
        ];
        let names: Vec<String> = times
            .iter()
            .map(|t| {
                plan_destination(
                    CaptureKind::Photo,
                    &CaptureTimestamp::from_camera_local(*t),
                    ".HIF",
                    Path::new("/sorted"),
                )
                .file_name
            })
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
