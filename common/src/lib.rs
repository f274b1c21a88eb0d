//! Keyword Extract Common Library
//!
//! スプレッドシートのキーワード抽出コア。
//! ファイル形式（calamine等）には依存せず、`Workbook` / `Document` トレイト越しに動作する。

pub mod error;
pub mod export;
pub mod keywords;
pub mod locale;
pub mod scanner;
pub mod types;
pub mod workbook;

pub use error::{Error, Result};
pub use keywords::{keywords_file_to_text, KeywordSet};
pub use locale::{Labels, Locale};
pub use scanner::{KeywordScanner, NoopObserver, ScanObserver, ScanOptions};
pub use types::{CellValue, DocumentError, MatchRecord, ScanOutcome, ScanStats};
pub use workbook::{Document, MemoryWorkbook, SheetGrid, Workbook};
