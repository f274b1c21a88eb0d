//! 抽出結果の型定義
//!
//! - CellValue: セル値（欠損は Empty = 空文字列）
//! - MatchRecord: キーワードに一致した1行分の出力
//! - ScanStats / DocumentError / ScanOutcome: スキャン1回分の集計

use serde::{Deserialize, Serialize};
use std::fmt;

/// セル値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    String(String),
    Number(f64),
    Bool(bool),
    /// 日付・時刻（表示用文字列）
    DateTime(String),
    /// `#N/A` などのエラー値
    Error(String),
}

impl CellValue {
    /// 文字列セルのみ照合対象
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::DateTime(s) => write!(f, "{}", s),
            CellValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::String(value.to_string())
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// キーワード一致レコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// フォルダ名（フォルダモードのみ）
    #[serde(default)]
    pub folder_name: Option<String>,
    pub file_name: String,
    pub sheet_name: String,
    /// データ行インデックス + 1
    pub row_number: usize,
    /// 一致したキーワード（入力順で最初のもの）
    pub keyword: String,
    /// B列の値（元の大文字小文字のまま）
    pub matched_value: String,
    /// C, D, E列
    pub context: [CellValue; 3],
}

/// 処理件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    pub files_processed: usize,
    pub sheets_processed: usize,
    pub rows_processed: usize,
    pub matches_found: usize,
}

/// 読み込めなかったドキュメント
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentError {
    pub file_name: String,
    pub message: String,
}

/// スキャン結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutcome {
    pub matches: Vec<MatchRecord>,
    pub stats: ScanStats,
    pub errors: Vec<DocumentError>,
}

impl ScanOutcome {
    /// 一致なし（エラーとは区別する）
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
