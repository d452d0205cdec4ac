mod capture_scanner;
mod exif_info;
mod ffprobe_info;
mod file_tools;
mod path_validator;

pub use capture_scanner::{CandidateFile, scan_capture_files};
pub use exif_info::{ExifCaptureTime, parse_sub_seconds, read_capture_time};
pub use ffprobe_info::{
    CREATION_TIME_TAG, ProbeError, get_format_tags, parse_creation_time, parse_format_tags,
};
pub use file_tools::move_file;
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
