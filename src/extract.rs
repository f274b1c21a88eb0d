//! 抽出処理の実行
//!
//! 入力チェック → スキャン → レポート出力 をまとめる。
//! ファイル・キーワード未指定はスキャン前に止める。一致なしはエラーではなく `report == None`。

use crate::error::{ExtractError, Result};
use crate::export::{write_report, ReportLayout};
use crate::scanner::{scan_folder, UploadStaging, UploadedFile};
use keyword_extract_common::{KeywordScanner, KeywordSet, Labels, ScanObserver, ScanOptions, ScanOutcome};
use std::path::{Path, PathBuf};
use tracing::info;

/// 抽出設定
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions<'a> {
    pub keywords: &'a KeywordSet,
    pub labels: &'static Labels,
    pub scan: ScanOptions,
}

/// 実行結果
#[derive(Debug)]
pub struct ExtractionSummary {
    pub outcome: ScanOutcome,
    /// 出力したレポート（一致なしの場合は None）
    pub report: Option<PathBuf>,
}

/// `--keywords` と `--keywords-file` からキーワード集合を作る
pub fn load_keywords(text: Option<&str>, file: Option<&Path>) -> Result<KeywordSet> {
    let file_content = match file {
        Some(path) => {
            if !path.is_file() {
                return Err(ExtractError::FileNotFound(path.display().to_string()));
            }
            Some(std::fs::read_to_string(path)?)
        }
        None => None,
    };

    Ok(KeywordSet::from_sources(text, file_content.as_deref()))
}

/// アップロードされたファイル群を抽出
///
/// `staging_dir` と `output_dir` は事前に作成しておくこと（`setup::ensure_workspace`）。
/// 一時ファイルへの書き出しに失敗したアップロードは、そのファイルだけエラーとして記録する。
pub fn run_uploads(
    uploads: &[UploadedFile],
    staging_dir: &Path,
    output_dir: &Path,
    options: ExtractOptions<'_>,
    observer: &mut dyn ScanObserver,
) -> Result<ExtractionSummary> {
    if uploads.is_empty() {
        return Err(ExtractError::NoDocuments("uploads".into()));
    }
    if options.keywords.is_empty() {
        return Err(ExtractError::NoKeywords);
    }
    if !output_dir.is_dir() {
        return Err(ExtractError::FolderNotFound(output_dir.display().to_string()));
    }

    let outcome = {
        let staging = UploadStaging::new(staging_dir)?;
        let documents = staging.documents(uploads);
        KeywordScanner::new(options.keywords)
            .with_options(options.scan)
            .scan(&documents, observer)
    };

    let report = write_report(&outcome.matches, output_dir, options.labels, ReportLayout::Files)?;
    info!(matches = outcome.matches.len(), errors = outcome.errors.len(), "upload extraction finished");

    Ok(ExtractionSummary { outcome, report })
}

/// フォルダ内のExcelファイルを抽出し、`dest_dir` にレポートを出力
pub fn run_folder(
    source_dir: &Path,
    dest_dir: &Path,
    options: ExtractOptions<'_>,
    observer: &mut dyn ScanObserver,
) -> Result<ExtractionSummary> {
    if options.keywords.is_empty() {
        return Err(ExtractError::NoKeywords);
    }
    if !dest_dir.is_dir() {
        return Err(ExtractError::FolderNotFound(dest_dir.display().to_string()));
    }

    let files = scan_folder(source_dir)?;
    if files.is_empty() {
        return Err(ExtractError::NoDocuments(source_dir.display().to_string()));
    }

    let outcome = KeywordScanner::new(options.keywords)
        .with_options(options.scan)
        .scan(&files, observer);

    let report = write_report(&outcome.matches, dest_dir, options.labels, ReportLayout::Folder)?;
    info!(matches = outcome.matches.len(), errors = outcome.errors.len(), "folder extraction finished");

    Ok(ExtractionSummary { outcome, report })
}
