//! アップロードファイルの一時保存
//!
//! 実行ごとに `upload_dir` の下へ専用の一時フォルダを作り、
//! 各アップロードは開く直前に `<連番>_<名前>` で書き出す。
//! 一時フォルダは `UploadStaging` の破棄時にまとめて削除される（それ以外のファイルには触れない）。

use crate::error::{ExtractError, Result};
use crate::workbook::CalamineWorkbook;
use keyword_extract_common::Document;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::debug;

/// アップロードされたファイル（表示名 + 内容）
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// ローカルファイルをアップロード扱いで読み込む
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExtractError::FileNotFound(path.display().to_string()));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let bytes = std::fs::read(path)?;
        Ok(Self { name, bytes })
    }
}

/// 実行1回分の一時フォルダ
#[derive(Debug)]
pub struct UploadStaging {
    dir: TempDir,
}

impl UploadStaging {
    /// `upload_dir` の下に一時フォルダを作る（`upload_dir` は事前に作成しておくこと）
    pub fn new(upload_dir: &Path) -> Result<Self> {
        if !upload_dir.is_dir() {
            return Err(ExtractError::FolderNotFound(upload_dir.display().to_string()));
        }

        let dir = tempfile::Builder::new()
            .prefix("staging-")
            .tempdir_in(upload_dir)?;
        debug!(dir = %dir.path().display(), "staging directory created");
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// アップロードをスキャン対象にする（書き出しは `open` 時）
    pub fn documents<'a>(&self, uploads: &'a [UploadedFile]) -> Vec<StagedUpload<'a>> {
        uploads
            .iter()
            .enumerate()
            .map(|(i, upload)| StagedUpload {
                upload,
                staged_path: self.dir.path().join(staged_file_name(i + 1, &upload.name)),
            })
            .collect()
    }
}

/// 同名のアップロードが衝突しないよう連番を付ける。
/// パス区切りを含む名前でも一時フォルダの外には出ない
fn staged_file_name(position: usize, name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "upload".to_string());
    format!("{:03}_{}", position, base)
}

/// 一時フォルダ経由で読むアップロード
#[derive(Debug)]
pub struct StagedUpload<'a> {
    upload: &'a UploadedFile,
    staged_path: PathBuf,
}

impl StagedUpload<'_> {
    pub fn staged_path(&self) -> &Path {
        &self.staged_path
    }
}

impl Document for StagedUpload<'_> {
    type Workbook = CalamineWorkbook;

    /// 表示名はアップロード時の名前のまま
    fn file_name(&self) -> &str {
        &self.upload.name
    }

    fn open(&self) -> keyword_extract_common::Result<CalamineWorkbook> {
        std::fs::write(&self.staged_path, &self.upload.bytes)?;
        debug!(
            path = %self.staged_path.display(),
            bytes = self.upload.bytes.len(),
            "staged upload"
        );

        CalamineWorkbook::open(&self.staged_path)
            .map_err(|e| keyword_extract_common::Error::Workbook(e.to_string()))
    }
}
