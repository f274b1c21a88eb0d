//! Report export shared across front ends.

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::locale::Labels;

/// レポートの列構成
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportLayout {
    /// アップロードしたファイル
    #[default]
    Files,
    /// フォルダモード（先頭にフォルダ名列）
    Folder,
}

impl ReportLayout {
    pub fn includes_folder(&self) -> bool {
        matches!(self, ReportLayout::Folder)
    }
}

/// 見出し行
pub fn report_headers(labels: &Labels, layout: ReportLayout) -> Vec<&'static str> {
    let mut headers = Vec::with_capacity(9);
    if layout.includes_folder() {
        headers.push(labels.folder_name);
    }
    headers.extend([
        labels.file_name,
        labels.sheet_name,
        labels.row_number,
        labels.keyword,
        labels.column_b,
        labels.column_c,
        labels.column_d,
        labels.column_e,
    ]);
    headers
}
