//! キーワードスキャナ
//!
//! ドキュメント → シート → 行の順に1回だけ走査し、B列にキーワードを含む行を収集する。
//! ドキュメント単位の失敗はスキャン全体を止めない（エラーとして記録して次へ進む）。

use crate::keywords::KeywordSet;
use crate::types::{CellValue, DocumentError, MatchRecord, ScanOutcome, ScanStats};
use crate::workbook::{Document, SheetGrid, Workbook};
use tracing::{debug, warn};

/// 照合する列（B列）
pub const MATCH_COLUMN: usize = 1;

/// 一致行から取り出す後続列の数（C, D, E列）
pub const CONTEXT_COLUMNS: usize = 3;

/// スキャン設定
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    /// 1行目を見出し行として扱い、照合しない
    pub header_row: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { header_row: true }
    }
}

/// 進捗通知（表示専用）
pub trait ScanObserver {
    /// ドキュメント1件の処理が終わった（失敗を含む）。`position` は1始まり
    fn document_finished(&mut self, position: usize, total: usize, file_name: &str) {
        let _ = (position, total, file_name);
    }

    fn document_failed(&mut self, error: &DocumentError) {
        let _ = error;
    }
}

/// 何もしないオブザーバ
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

pub struct KeywordScanner<'a> {
    keywords: &'a KeywordSet,
    options: ScanOptions,
}

impl<'a> KeywordScanner<'a> {
    pub fn new(keywords: &'a KeywordSet) -> Self {
        Self {
            keywords,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// 全ドキュメントを順に走査
    ///
    /// キーワード集合が空でないことは呼び出し側で保証する。
    pub fn scan<D, O>(&self, documents: &[D], observer: &mut O) -> ScanOutcome
    where
        D: Document,
        O: ScanObserver + ?Sized,
    {
        let mut outcome = ScanOutcome::default();
        let total = documents.len();

        for (i, document) in documents.iter().enumerate() {
            // 開けなかったファイルも「処理済み」に数える
            outcome.stats.files_processed += 1;

            if let Err(message) = self.scan_document(document, &mut outcome) {
                warn!(file = document.file_name(), "skipping document: {}", message);
                let error = DocumentError {
                    file_name: document.file_name().to_string(),
                    message,
                };
                observer.document_failed(&error);
                outcome.errors.push(error);
            }

            observer.document_finished(i + 1, total, document.file_name());
        }

        debug!(
            files = outcome.stats.files_processed,
            sheets = outcome.stats.sheets_processed,
            rows = outcome.stats.rows_processed,
            matches = outcome.stats.matches_found,
            "scan finished"
        );

        outcome
    }

    fn scan_document<D: Document>(
        &self,
        document: &D,
        outcome: &mut ScanOutcome,
    ) -> std::result::Result<(), String> {
        let mut workbook = document.open().map_err(|e| e.to_string())?;

        for sheet_name in workbook.sheet_names() {
            outcome.stats.sheets_processed += 1;

            let grid = workbook
                .read_sheet(&sheet_name)
                .map_err(|e| format!("{}: {}", sheet_name, e))?;

            debug!(
                file = document.file_name(),
                sheet = %sheet_name,
                rows = grid.height(),
                cols = grid.width(),
                "scanning sheet"
            );

            self.scan_sheet(document, &sheet_name, &grid, outcome);
        }

        Ok(())
    }

    fn scan_sheet<D: Document>(
        &self,
        document: &D,
        sheet_name: &str,
        grid: &SheetGrid,
        outcome: &mut ScanOutcome,
    ) {
        if grid.width() <= MATCH_COLUMN {
            return;
        }

        let first = usize::from(self.options.header_row);

        for row in first..grid.height() {
            outcome.stats.rows_processed += 1;

            let Some(value) = grid.cell(row, MATCH_COLUMN).as_str() else {
                continue;
            };

            let Some(keyword) = self.keywords.first_match(&value.to_lowercase()) else {
                continue;
            };

            outcome.matches.push(MatchRecord {
                folder_name: document.folder_name().map(str::to_string),
                file_name: document.file_name().to_string(),
                sheet_name: sheet_name.to_string(),
                row_number: row - first + 1,
                keyword: keyword.to_string(),
                matched_value: value.to_string(),
                context: context_cells(grid, row),
            });
            outcome.stats.matches_found += 1;
        }
    }
}

/// C〜E列（足りない分は Empty）
fn context_cells(grid: &SheetGrid, row: usize) -> [CellValue; CONTEXT_COLUMNS] {
    std::array::from_fn(|offset| grid.cell(row, MATCH_COLUMN + 1 + offset).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::workbook::MemoryWorkbook;

    struct TestDoc {
        name: &'static str,
        folder: Option<&'static str>,
        workbook: Option<MemoryWorkbook>,
    }

    impl TestDoc {
        fn ok(name: &'static str, workbook: MemoryWorkbook) -> Self {
            Self { name, folder: None, workbook: Some(workbook) }
        }

        fn corrupt(name: &'static str) -> Self {
            Self { name, folder: None, workbook: None }
        }
    }

    impl Document for TestDoc {
        type Workbook = MemoryWorkbook;

        fn file_name(&self) -> &str {
            self.name
        }

        fn folder_name(&self) -> Option<&str> {
            self.folder
        }

        fn open(&self) -> Result<MemoryWorkbook> {
            self.workbook
                .clone()
                .ok_or_else(|| Error::Workbook("not a spreadsheet".into()))
        }
    }

    #[derive(Default)]
    struct Recorder {
        finished: Vec<(usize, usize, String)>,
        failed: Vec<String>,
    }

    impl ScanObserver for Recorder {
        fn document_finished(&mut self, position: usize, total: usize, file_name: &str) {
            self.finished.push((position, total, file_name.to_string()));
        }

        fn document_failed(&mut self, error: &DocumentError) {
            self.failed.push(error.file_name.clone());
        }
    }

    fn header() -> Vec<&'static str> {
        vec!["A", "B", "C", "D", "E"]
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let keywords = KeywordSet::parse("invoice");
        let wb = MemoryWorkbook::new().with_sheet(
            "Sheet1",
            vec![
                header(),
                vec!["1", "Overdue INVOICE #12"],
                vec!["2", "receipt"],
                vec!["3", "InVoIcE"],
            ],
        );
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);

        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.matches[0].matched_value, "Overdue INVOICE #12");
        assert_eq!(outcome.matches[0].keyword, "invoice");
        assert_eq!(outcome.matches[0].row_number, 1);
        assert_eq!(outcome.matches[1].matched_value, "InVoIcE");
        assert_eq!(outcome.matches[1].row_number, 3);
    }

    #[test]
    fn test_context_window_padded() {
        let keywords = KeywordSet::parse("foo");
        let wb = MemoryWorkbook::new().with_sheet(
            "S",
            vec![header(), vec!["x", "contains foo", "only-C"]],
        );
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);

        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(
            outcome.matches[0].context,
            [
                CellValue::String("only-C".into()),
                CellValue::Empty,
                CellValue::Empty
            ]
        );
    }

    #[test]
    fn test_context_ignores_columns_past_e() {
        let keywords = KeywordSet::parse("foo");
        let wb = MemoryWorkbook::new().with_sheet(
            "S",
            vec![header(), vec!["x", "foo", "c", "d", "e", "f"]],
        );
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);
        let context: Vec<String> = outcome.matches[0].context.iter().map(|c| c.to_string()).collect();
        assert_eq!(context, vec!["c", "d", "e"]);
    }

    #[test]
    fn test_non_string_cells_never_match() {
        let keywords = KeywordSet::parse("42");
        let grid = SheetGrid::new(vec![
            vec![CellValue::from("A"), CellValue::from("B")],
            vec![CellValue::Empty, CellValue::Number(42.0)],
            vec![CellValue::Empty, CellValue::String("item 42".into())],
        ]);
        let wb = MemoryWorkbook::new().with_sheet("S", grid);
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);

        assert_eq!(outcome.stats.rows_processed, 2);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].row_number, 2);
    }

    #[test]
    fn test_first_keyword_by_input_order() {
        let keywords = KeywordSet::parse("bar, foo");
        let wb = MemoryWorkbook::new().with_sheet("S", vec![header(), vec!["", "foo bar"]]);
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);
        assert_eq!(outcome.matches[0].keyword, "bar");
    }

    #[test]
    fn test_narrow_sheet_counted_but_not_scanned() {
        let keywords = KeywordSet::parse("foo");
        let wb = MemoryWorkbook::new()
            .with_sheet("Narrow", vec![vec!["foo"], vec!["foo"]])
            .with_sheet("Empty", SheetGrid::default())
            .with_sheet("Wide", vec![header(), vec!["", "foo"], vec!["", "bar"]]);
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);

        assert_eq!(
            outcome.stats,
            ScanStats {
                files_processed: 1,
                sheets_processed: 3,
                rows_processed: 2,
                matches_found: 1,
            }
        );
    }

    #[test]
    fn test_header_row_option() {
        let keywords = KeywordSet::parse("foo");
        let wb = MemoryWorkbook::new().with_sheet("S", vec![vec!["", "foo header"], vec!["", "foo"]]);
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let with_header = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);
        assert_eq!(with_header.stats.rows_processed, 1);
        assert_eq!(with_header.matches.len(), 1);
        assert_eq!(with_header.matches[0].row_number, 1);

        let no_header = KeywordScanner::new(&keywords)
            .with_options(ScanOptions { header_row: false })
            .scan(&docs, &mut NoopObserver);
        assert_eq!(no_header.stats.rows_processed, 2);
        assert_eq!(no_header.matches.len(), 2);
        assert_eq!(no_header.matches[0].matched_value, "foo header");
        assert_eq!(no_header.matches[1].row_number, 2);
    }

    #[test]
    fn test_corrupt_document_is_skipped() {
        let keywords = KeywordSet::parse("foo");
        let make = || MemoryWorkbook::new().with_sheet("S", vec![header(), vec!["", "foo"]]);
        let docs = vec![
            TestDoc::ok("one.xlsx", make()),
            TestDoc::corrupt("two.xlsx"),
            TestDoc::ok("three.xlsx", make()),
        ];
        let mut recorder = Recorder::default();

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut recorder);

        assert_eq!(outcome.stats.files_processed, 3);
        assert_eq!(outcome.stats.sheets_processed, 2);
        assert_eq!(outcome.stats.matches_found, 2);
        let files: Vec<&str> = outcome.matches.iter().map(|m| m.file_name.as_str()).collect();
        assert_eq!(files, vec!["one.xlsx", "three.xlsx"]);

        assert_eq!(outcome.errors.len(), 1);
        assert_eq!(outcome.errors[0].file_name, "two.xlsx");
        assert!(outcome.errors[0].message.contains("not a spreadsheet"));

        assert_eq!(recorder.failed, vec!["two.xlsx"]);
        assert_eq!(recorder.finished.len(), 3);
        assert_eq!(recorder.finished[1], (2, 3, "two.xlsx".to_string()));
    }

    #[test]
    fn test_no_matches_is_empty_outcome() {
        let keywords = KeywordSet::parse("zzz");
        let wb = MemoryWorkbook::new().with_sheet("S", vec![header(), vec!["", "foo"]]);
        let docs = vec![TestDoc::ok("a.xlsx", wb)];

        let outcome = KeywordScanner::new(&keywords).scan(&docs, &mut NoopObserver);

        assert!(outcome.is_empty());
        assert!(!outcome.has_errors());
        assert_eq!(outcome.stats.rows_processed, 1);
    }

    #[test]
    fn test_folder_name_and_ordering() {
        let keywords = KeywordSet::parse("k");
        let wb = MemoryWorkbook::new()
            .with_sheet("S1", vec![header(), vec!["", "k1"], vec!["", "k2"]])
            .with_sheet("S2", vec![header(), vec!["", "k3"]]);
        let mut doc = TestDoc::ok("a.xlsx", wb);
        doc.folder = Some("inbox");

        let outcome = KeywordScanner::new(&keywords).scan(&[doc], &mut NoopObserver);

        let order: Vec<(&str, usize)> = outcome
            .matches
            .iter()
            .map(|m| (m.sheet_name.as_str(), m.row_number))
            .collect();
        assert_eq!(order, vec![("S1", 1), ("S1", 2), ("S2", 1)]);
        assert!(outcome.matches.iter().all(|m| m.folder_name.as_deref() == Some("inbox")));
    }
}
