//! Excelレポート出力（CLI版）
//!
//! バッファ生成は共通ライブラリ、ファイル名の決定と書き出しはここで行う。

use crate::error::{ExtractError, Result};
use chrono::{DateTime, Local, TimeZone};
use keyword_extract_common::export::excel_core::generate_report_buffer;
use keyword_extract_common::export::ReportLayout;
use keyword_extract_common::{Labels, MatchRecord};
use std::path::{Path, PathBuf};
use tracing::info;

const REPORT_PREFIX: &str = "extracted";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// `extracted_<YYYY-MM-DD_HH-MM-SS>.xlsx`
pub fn report_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.xlsx", REPORT_PREFIX, at.format(TIMESTAMP_FORMAT))
}

/// 一致レコードをレポートに書き出す
///
/// 一致なしの場合はファイルを作らず `None` を返す。
/// 出力フォルダは呼び出し側で用意しておくこと。
pub fn write_report(
    matches: &[MatchRecord],
    output_dir: &Path,
    labels: &Labels,
    layout: ReportLayout,
) -> Result<Option<PathBuf>> {
    write_report_at(matches, output_dir, labels, layout, &Local::now())
}

pub fn write_report_at<Tz: TimeZone>(
    matches: &[MatchRecord],
    output_dir: &Path,
    labels: &Labels,
    layout: ReportLayout,
    at: &DateTime<Tz>,
) -> Result<Option<PathBuf>>
where
    Tz::Offset: std::fmt::Display,
{
    if matches.is_empty() {
        return Ok(None);
    }

    if !output_dir.is_dir() {
        return Err(ExtractError::FolderNotFound(output_dir.display().to_string()));
    }

    let buffer = generate_report_buffer(matches, labels, layout)?;

    let output_path = output_dir.join(report_file_name(at));
    std::fs::write(&output_path, buffer)?;
    info!(path = %output_path.display(), rows = matches.len(), "report written");

    Ok(Some(output_path))
}
