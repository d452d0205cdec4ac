//! 命令列參數定義

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// 依拍攝時間整理相機輸出的影片與照片
#[derive(Parser, Debug)]
#[command(name = "auto_capture_organize", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 整理影片（C*.MP4），以 ffprobe 讀取拍攝時間
    Videos(PathArgs),

    /// 整理照片（DSC*），以 EXIF 讀取拍攝時間並隔離傳輸中斷的檔案
    Photos(PathArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct PathArgs {
    /// 未整理的來源資料夾
    #[arg(long, value_name = "DIR")]
    pub unsorted_path: PathBuf,

    /// 整理後的目標資料夾（不存在時自動建立）
    #[arg(long, value_name = "DIR")]
    pub sorted_path: PathBuf,

    /// 記錄等級
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_videos_command() {
        let args = Args::try_parse_from([
            "auto_capture_organize",
            "videos",
            "--unsorted-path",
            "/camera/unsorted",
            "--sorted-path",
            "/camera/sorted",
        ])
        .unwrap();

        let Commands::Videos(paths) = args.command else {
            panic!("expected videos command");
        };
        assert_eq!(paths.unsorted_path, PathBuf::from("/camera/unsorted"));
        assert_eq!(paths.sorted_path, PathBuf::from("/camera/sorted"));
        assert_eq!(paths.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_photos_with_log_level() {
        let args = Args::try_parse_from([
            "auto_capture_organize",
            "photos",
            "--unsorted-path",
            "in",
            "--sorted-path",
            "out",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert!(matches!(
            args.command,
            Commands::Photos(PathArgs {
                log_level: LogLevel::Debug,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_command_is_error() {
        let result = Args::try_parse_from(["auto_capture_organize", "music"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_paths_is_error() {
        let result = Args::try_parse_from(["auto_capture_organize", "videos"]);
        assert!(result.is_err());
    }
}
