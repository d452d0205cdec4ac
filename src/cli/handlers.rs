use crate::cli::args::{Args, Commands, PathArgs};
use crate::component::CaptureRenamer;
use crate::component::capture_renamer::display_summary;
use crate::config::{CaptureKind, Config, RenameJob};
use crate::init::init_logger;
use console::style;
use log::error;

/// 執行子命令，回傳結束代碼（0 成功，1 致命錯誤）
#[must_use]
pub fn run_command(args: Args) -> u8 {
    let (kind, paths) = match args.command {
        Commands::Videos(paths) => (CaptureKind::Video, paths),
        Commands::Photos(paths) => (CaptureKind::Photo, paths),
    };

    init_logger(paths.log_level.as_str());

    let config = match Config::new() {
        Ok(config) => config,
        Err(e) => return report_fatal(&e),
    };

    run_renamer(&config, kind, paths)
}

fn run_renamer(config: &Config, kind: CaptureKind, paths: PathArgs) -> u8 {
    println!(
        "{}",
        style(format!("=== 依拍攝時間整理{kind} ===")).cyan().bold()
    );

    let job = RenameJob {
        kind,
        unsorted_dir: paths.unsorted_path,
        sorted_dir: paths.sorted_path,
    };

    match CaptureRenamer::new(config, job).run() {
        Ok(outcome) => {
            display_summary(&outcome);
            outcome.exit_code()
        }
        Err(e) => report_fatal(&e),
    }
}

fn report_fatal(e: &dyn std::error::Error) -> u8 {
    error!("{e}");
    eprintln!("{} {}", style("錯誤:").red().bold(), e);
    1
}
