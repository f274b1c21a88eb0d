//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックを開けない・シートを読めない
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// レポート生成の失敗
    #[error("Report error: {0}")]
    Report(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = Error::Io(io_error);
        let display = format!("{}", error);
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_error_display_workbook() {
        let error = Error::Workbook("broken.xlsx: invalid zip header".to_string());
        assert_eq!(
            format!("{}", error),
            "Workbook error: broken.xlsx: invalid zip header"
        );
    }

    #[test]
    fn test_error_display_report() {
        let error = Error::Report("シート名設定エラー".to_string());
        assert_eq!(format!("{}", error), "Report error: シート名設定エラー");
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Workbook("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Workbook"));
        assert!(debug.contains("テスト"));
    }
}
