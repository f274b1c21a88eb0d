use keyword_extract_common::Labels;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("スキャン対象のExcelファイルがありません: {0}")]
    NoDocuments(String),

    #[error("キーワードが指定されていません。--keywords または --keywords-file を指定してください")]
    NoKeywords,

    #[error("Excel読み込みエラー: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] keyword_extract_common::Error),
}

impl ExtractError {
    /// コンソール表示用のメッセージ（見出しは表示言語に合わせる）
    pub fn describe(&self, labels: &Labels) -> String {
        use keyword_extract_common::Error as CommonError;

        match self {
            ExtractError::Config(detail) => format!("{}: {}", labels.error_config, detail),
            ExtractError::FileNotFound(path) => format!("{}: {}", labels.error_file_not_found, path),
            ExtractError::FolderNotFound(path) => {
                format!("{}: {}", labels.error_folder_not_found, path)
            }
            ExtractError::NoDocuments(source) => format!("{}: {}", labels.error_no_documents, source),
            ExtractError::NoKeywords => labels.error_no_keywords.to_string(),
            ExtractError::Spreadsheet(e) => format!("{}: {}", labels.error_workbook, e),
            ExtractError::JsonParse(e) => format!("{}: {}", labels.error_config, e),
            ExtractError::Io(e) => format!("{}: {}", labels.error_io, e),
            ExtractError::Common(CommonError::Io(e)) => format!("{}: {}", labels.error_io, e),
            ExtractError::Common(CommonError::Workbook(detail)) => {
                format!("{}: {}", labels.error_workbook, detail)
            }
            ExtractError::Common(CommonError::Report(detail)) => {
                format!("{}: {}", labels.error_report, detail)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
