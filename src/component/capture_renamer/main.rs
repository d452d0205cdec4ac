//! 相機檔案整理主模組
//!
//! 協調掃描、重試群組解析、拍攝時間擷取與搬移的整體流程

use super::destination_planner::plan_destination;
use super::metadata_extractor::{MetadataExtractor, extractor_for};
use super::relocator::{RelocationOutcome, relocate};
use crate::component::retry_group_resolver::RetryGroupResolver;
use crate::config::{CapturePattern, CapturePatternTable, Config, RenameJob};
use crate::error::{OrganizeError, Result};
use crate::tools::{
    CandidateFile, ensure_directory_exists, scan_capture_files, validate_directory_exists,
};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

/// 整理結果統計
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// 符合樣式的檔案數
    pub discovered: usize,
    pub renamed: usize,
    /// 沒有拍攝時間而略過
    pub skipped_no_metadata: usize,
    /// 目標已存在而略過
    pub skipped_collision: usize,
    /// 已移到隔離資料夾
    pub quarantined: usize,
    /// 應隔離但移動失敗
    pub quarantine_failed: usize,
    /// 搬移失敗
    pub errors: usize,
    /// 因外部工具錯誤而中止
    pub aborted: bool,
}

impl RunOutcome {
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_no_metadata + self.skipped_collision
    }

    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.aborted { 1 } else { 0 }
    }
}

/// 相機檔案整理器
pub struct CaptureRenamer {
    job: RenameJob,
    pattern: CapturePattern,
    extractor: Box<dyn MetadataExtractor>,
    resolver: RetryGroupResolver,
}

impl CaptureRenamer {
    #[must_use]
    pub fn new(config: &Config, job: RenameJob) -> Self {
        let extractor = extractor_for(job.kind, &config.tool_paths);
        Self::with_extractor(&config.pattern_table, job, extractor)
    }

    /// 使用自訂的拍攝時間擷取方式
    #[must_use]
    pub fn with_extractor(
        pattern_table: &CapturePatternTable,
        job: RenameJob,
        extractor: Box<dyn MetadataExtractor>,
    ) -> Self {
        Self {
            pattern: pattern_table.pattern_for(job.kind).clone(),
            job,
            extractor,
            resolver: RetryGroupResolver::new(),
        }
    }

    /// 執行整理
    ///
    /// 來源資料夾不存在或無法建立目標資料夾時回傳錯誤；
    /// 中途遇到 ffprobe 無法執行時停止處理並標記 `aborted`
    pub fn run(&self) -> Result<RunOutcome> {
        let kind = self.job.kind;
        validate_directory_exists(&self.job.unsorted_dir)?;
        ensure_directory_exists(&self.job.sorted_dir)?;

        info!(
            "開始整理{kind}: {} -> {}",
            self.job.unsorted_dir.display(),
            self.job.sorted_dir.display()
        );

        let mut outcome = RunOutcome::default();
        let mut files = scan_capture_files(&self.job.unsorted_dir, &self.pattern);
        outcome.discovered = files.len();

        if kind.resolves_retries() {
            let resolution = self.resolver.resolve(files, &self.job.unsorted_dir);
            outcome.quarantined = resolution.quarantined.len();
            outcome.quarantine_failed = resolution.quarantine_failures.len();
            files = resolution.survivors;
        }

        if files.is_empty() {
            info!("找不到任何符合 {} 的{kind}檔案", self.pattern);
            return Ok(outcome);
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        info!("找到 {} 個{kind}檔案", files.len());

        let progress_bar = ProgressBar::new(files.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("整理中...");

        for file in &files {
            if let Err(e) = self.process_file(file, &mut outcome) {
                error!("{e}，停止處理剩餘檔案");
                outcome.aborted = true;
                progress_bar.abandon_with_message("已中止");
                return Ok(outcome);
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_with_message("完成");
        Ok(outcome)
    }

    fn process_file(&self, file: &CandidateFile, outcome: &mut RunOutcome) -> Result<()> {
        let timestamp = match self.extractor.capture_time(&file.path) {
            Ok(Some(timestamp)) => timestamp,
            Ok(None) => {
                warn!("找不到拍攝時間，略過: {}", file.path.display());
                outcome.skipped_no_metadata += 1;
                return Ok(());
            }
            Err(e @ OrganizeError::MetadataToolUnavailable { .. }) => return Err(e),
            Err(e) => {
                warn!("讀取拍攝時間失敗，略過 {}: {e}", file.path.display());
                outcome.skipped_no_metadata += 1;
                return Ok(());
            }
        };

        let plan = plan_destination(
            self.job.kind,
            &timestamp,
            &file.extension(),
            &self.job.sorted_dir,
        );

        match relocate(&file.path, &plan) {
            RelocationOutcome::Moved(_) => outcome.renamed += 1,
            RelocationOutcome::Collision(_) => outcome.skipped_collision += 1,
            RelocationOutcome::Failed => outcome.errors += 1,
        }

        Ok(())
    }
}

/// 顯示整理結果
pub fn display_summary(outcome: &RunOutcome) {
    println!();
    println!("{}", style("=== 整理結果 ===").cyan().bold());
    println!("  找到: {} 個", outcome.discovered);
    println!("  成功: {} 個", style(outcome.renamed).green());
    if outcome.skipped_no_metadata > 0 {
        println!(
            "  跳過（無拍攝時間）: {} 個",
            style(outcome.skipped_no_metadata).yellow()
        );
    }
    if outcome.skipped_collision > 0 {
        println!(
            "  跳過（目標已存在）: {} 個",
            style(outcome.skipped_collision).yellow()
        );
    }
    if outcome.quarantined > 0 {
        println!("  隔離（可能損壞）: {} 個", style(outcome.quarantined).yellow());
    }
    if outcome.quarantine_failed > 0 {
        println!("  隔離失敗: {} 個", style(outcome.quarantine_failed).red());
    }
    if outcome.errors > 0 {
        println!("  失敗: {} 個", style(outcome.errors).red());
    }
    if outcome.aborted {
        println!("  {}", style("已中止").red().bold());
    }

    info!(
        "整理完成 - 成功: {}, 跳過: {}, 隔離: {}, 失敗: {}",
        outcome.renamed,
        outcome.skipped(),
        outcome.quarantined,
        outcome.errors
    );
}
