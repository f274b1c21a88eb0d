//! calamine によるワークブック読み込み
//!
//! 列は常にA列起点に揃える（A列が空でもB列はB列のまま）。
//! 行は使用範囲の先頭行から数える。

use crate::error::Result;
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use keyword_extract_common::{CellValue, SheetGrid, Workbook};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    /// 拡張子から形式を判定して開く（xls / xlsx / xlsb / ods）
    pub fn open(path: &Path) -> Result<Self> {
        let sheets = open_workbook_auto(path)?;
        Ok(Self { sheets })
    }
}

impl Workbook for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn read_sheet(&mut self, name: &str) -> keyword_extract_common::Result<SheetGrid> {
        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| keyword_extract_common::Error::Workbook(e.to_string()))?;
        Ok(range_to_grid(&range))
    }
}

/// 使用範囲をA列起点の格子に変換
pub fn range_to_grid(range: &Range<Data>) -> SheetGrid {
    let Some((_, start_col)) = range.start() else {
        return SheetGrid::default();
    };

    let rows = range
        .rows()
        .map(|row| {
            let mut cells = vec![CellValue::Empty; start_col as usize];
            cells.extend(row.iter().map(to_cell_value));
            cells
        })
        .collect();

    SheetGrid::new(rows)
}

fn to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::DateTime(ndt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
