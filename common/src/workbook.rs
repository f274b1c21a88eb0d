//! ワークブック抽象
//!
//! スキャナはファイル形式を知らない。実装側（CLIではcalamine）が
//! `Workbook` でシートを列挙し、`Document` で入力元ごとの開き方を提供する。

use crate::error::{Error, Result};
use crate::types::CellValue;

/// シートのセル格子（A1起点、行ごとに長さは不揃いでもよい）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 列数（最も長い行に合わせる）
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// 範囲外は Empty
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        static EMPTY: CellValue = CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }
}

impl From<Vec<Vec<&str>>> for SheetGrid {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Self::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(CellValue::from).collect())
                .collect(),
        )
    }
}

/// 開いたワークブック
pub trait Workbook {
    /// シート名（ブック内の順序）
    fn sheet_names(&self) -> Vec<String>;

    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid>;
}

/// スキャン対象ドキュメント
pub trait Document {
    type Workbook: Workbook;

    /// 表示名（レポートのファイル名列）
    fn file_name(&self) -> &str;

    /// フォルダ名（フォルダモードのみ）
    fn folder_name(&self) -> Option<&str> {
        None
    }

    fn open(&self) -> Result<Self::Workbook>;
}

/// メモリ上のワークブック
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<(String, SheetGrid)>,
}

impl MemoryWorkbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, name: impl Into<String>, grid: impl Into<SheetGrid>) -> Self {
        self.sheets.push((name.into(), grid.into()));
        self
    }
}

impl Workbook for MemoryWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.iter().map(|(name, _)| name.clone()).collect()
    }

    fn read_sheet(&mut self, name: &str) -> Result<SheetGrid> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, grid)| grid.clone())
            .ok_or_else(|| Error::Workbook(format!("sheet not found: {}", name)))
    }
}
