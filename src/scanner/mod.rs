//! 入力ファイルの列挙
//!
//! - フォルダモード: 指定フォルダ直下の .xls / .xlsx
//! - アップロードモード: バイト列を実行ごとの一時フォルダに書き出してから読む（upload.rs）

mod upload;

pub use upload::{StagedUpload, UploadStaging, UploadedFile};

use crate::error::{ExtractError, Result};
use crate::workbook::CalamineWorkbook;
use keyword_extract_common::Document;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// ファイル単位のスキャン対象
#[derive(Debug, Clone)]
pub struct SpreadsheetFile {
    pub path: PathBuf,
    pub file_name: String,
    /// フォルダモードのみ
    pub folder_name: Option<String>,
}

impl SpreadsheetFile {
    pub fn new(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            folder_name: None,
        }
    }
}

impl Document for SpreadsheetFile {
    type Workbook = CalamineWorkbook;

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn folder_name(&self) -> Option<&str> {
        self.folder_name.as_deref()
    }

    fn open(&self) -> keyword_extract_common::Result<CalamineWorkbook> {
        CalamineWorkbook::open(&self.path)
            .map_err(|e| keyword_extract_common::Error::Workbook(e.to_string()))
    }
}

const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx"];

/// 拡張子がExcel形式か（大文字小文字を区別しない）
pub fn is_spreadsheet_extension(ext: &str) -> bool {
    SPREADSHEET_EXTENSIONS
        .iter()
        .any(|e| e.eq_ignore_ascii_case(ext))
}

pub fn scan_folder(folder: &Path) -> Result<Vec<SpreadsheetFile>> {
    if !folder.is_dir() {
        return Err(ExtractError::FolderNotFound(folder.display().to_string()));
    }

    let folder_name = folder_display_name(folder);
    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let matches_ext = path
            .extension()
            .map(|ext| is_spreadsheet_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if matches_ext {
            let mut file = SpreadsheetFile::new(path.to_path_buf());
            file.folder_name = Some(folder_name.clone());
            files.push(file);
        }
    }

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// `.` などの相対指定でも実際のフォルダ名を返す
fn folder_display_name(folder: &Path) -> String {
    let resolved = folder.canonicalize().unwrap_or_else(|_| folder.to_path_buf());
    resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.display().to_string())
}
