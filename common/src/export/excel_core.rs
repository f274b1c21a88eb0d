//! Excelレポート生成（共通ライブラリ）
//!
//! 一致レコードを1行ずつ書き出し、見出し行を固定・オートフィルタ付きにする。

use super::{report_headers, ReportLayout};
use crate::error::{Error, Result};
use crate::locale::Labels;
use crate::types::{CellValue, MatchRecord};
use rust_xlsxwriter::*;

/// 列幅（見出しを除く各列の標準幅）
const NARROW_COL_WIDTH: f64 = 12.0;
const NAME_COL_WIDTH: f64 = 24.0;
const VALUE_COL_WIDTH: f64 = 40.0;

/// レポートをバッファに生成
///
/// # Arguments
/// * `matches` - 一致レコード（出力順）
/// * `labels` - 見出しの文言
/// * `layout` - フォルダ名列の有無
pub fn generate_report_buffer(
    matches: &[MatchRecord],
    labels: &Labels,
    layout: ReportLayout,
) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(labels.report_sheet)
        .map_err(|e| Error::Report(format!("sheet name: {}", e)))?;

    let headers = report_headers(labels, layout);
    for (col, header) in headers.iter().enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| Error::Report(format!("header: {}", e)))?;
        worksheet
            .set_column_width(col, column_width(headers.len(), col as usize))
            .map_err(|e| Error::Report(format!("column width: {}", e)))?;
    }

    for (i, record) in matches.iter().enumerate() {
        let row = (i + 1) as u32;
        let mut col: u16 = 0;

        if layout.includes_folder() {
            let folder = record.folder_name.as_deref().unwrap_or_default();
            write_text(worksheet, row, col, folder)?;
            col += 1;
        }

        write_text(worksheet, row, col, &record.file_name)?;
        write_text(worksheet, row, col + 1, &record.sheet_name)?;
        worksheet
            .write_number(row, col + 2, record.row_number as f64)
            .map_err(|e| Error::Report(format!("row {}: {}", row, e)))?;
        write_text(worksheet, row, col + 3, &record.keyword)?;
        write_text(worksheet, row, col + 4, &record.matched_value)?;

        for (offset, value) in record.context.iter().enumerate() {
            write_cell(worksheet, row, col + 5 + offset as u16, value)?;
        }
    }

    let last_col = (headers.len() - 1) as u16;
    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| Error::Report(format!("freeze panes: {}", e)))?;
    worksheet
        .autofilter(0, 0, matches.len() as u32, last_col)
        .map_err(|e| Error::Report(format!("autofilter: {}", e)))?;

    workbook
        .save_to_buffer()
        .map_err(|e| Error::Report(format!("save: {}", e)))
}

fn column_width(total: usize, col: usize) -> f64 {
    // 後ろから: E, D, C, B列の内容 / キーワード / 行番号 / シート名 / ファイル名 / フォルダ名
    let from_end = total - 1 - col;
    match from_end {
        0..=3 => VALUE_COL_WIDTH,
        4 | 5 => NARROW_COL_WIDTH,
        _ => NAME_COL_WIDTH,
    }
}

fn write_text(worksheet: &mut Worksheet, row: u32, col: u16, text: &str) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    worksheet
        .write_string(row, col, text)
        .map_err(|e| Error::Report(format!("row {}: {}", row, e)))?;
    Ok(())
}

/// 数値・真偽値は型を保って書き込む
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &CellValue) -> Result<()> {
    let written = match value {
        CellValue::Empty => return Ok(()),
        CellValue::Number(n) => worksheet.write_number(row, col, *n),
        CellValue::Bool(b) => worksheet.write_boolean(row, col, *b),
        CellValue::String(s) | CellValue::DateTime(s) | CellValue::Error(s) => {
            worksheet.write_string(row, col, s)
        }
    };
    written.map_err(|e| Error::Report(format!("row {}: {}", row, e)))?;
    Ok(())
}
