//! 表示ラベル
//!
//! レポートの見出しとコンソールメッセージの文言テーブル。
//! ロケールによる分岐はこのテーブルの選択だけで行う。

use serde::{Deserialize, Serialize};

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Az,
    Ja,
}

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &EN,
            Locale::Az => &AZ,
            Locale::Ja => &JA,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "az" | "azerbaijani" => Ok(Locale::Az),
            "ja" | "japanese" => Ok(Locale::Ja),
            _ => Err(format!("Unknown locale: {}. Use en, az, or ja", s)),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Az => write!(f, "az"),
            Locale::Ja => write!(f, "ja"),
        }
    }
}

/// 文言テーブル
#[derive(Debug)]
pub struct Labels {
    // レポート見出し
    pub folder_name: &'static str,
    pub file_name: &'static str,
    pub sheet_name: &'static str,
    pub row_number: &'static str,
    pub keyword: &'static str,
    pub column_b: &'static str,
    pub column_c: &'static str,
    pub column_d: &'static str,
    pub column_e: &'static str,
    pub report_sheet: &'static str,

    // 件数
    pub files_processed: &'static str,
    pub sheets_processed: &'static str,
    pub rows_processed: &'static str,
    pub matches_found: &'static str,

    // メッセージ
    pub started: &'static str,
    pub finished: &'static str,
    pub no_matches: &'static str,
    pub missing_input: &'static str,
    pub document_error: &'static str,
    pub report_saved: &'static str,
    pub progress: &'static str,

    // 設定表示
    pub config_saved: &'static str,
    pub config_title: &'static str,
    pub config_locale: &'static str,
    pub config_upload_dir: &'static str,
    pub config_results_dir: &'static str,

    // エラー見出し
    pub error_config: &'static str,
    pub error_file_not_found: &'static str,
    pub error_folder_not_found: &'static str,
    pub error_no_documents: &'static str,
    pub error_no_keywords: &'static str,
    pub error_workbook: &'static str,
    pub error_report: &'static str,
    pub error_io: &'static str,
}

pub static EN: Labels = Labels {
    folder_name: "Folder Name",
    file_name: "File Name",
    sheet_name: "Sheet Name",
    row_number: "Row Number",
    keyword: "Keyword",
    column_b: "Column B Content",
    column_c: "Column C Content",
    column_d: "Column D Content",
    column_e: "Column E Content",
    report_sheet: "Matches",
    files_processed: "Files processed",
    sheets_processed: "Sheets processed",
    rows_processed: "Rows processed",
    matches_found: "Matches found",
    started: "Extraction started... please wait.",
    finished: "Extraction complete!",
    no_matches: "No matches found.",
    missing_input: "Please provide all inputs!",
    document_error: "Error in file",
    report_saved: "Report saved",
    progress: "files processed",
    config_saved: "Settings saved",
    config_title: "Settings",
    config_locale: "Language",
    config_upload_dir: "Upload folder",
    config_results_dir: "Results folder",
    error_config: "Configuration error",
    error_file_not_found: "File not found",
    error_folder_not_found: "Folder not found",
    error_no_documents: "No Excel files to scan",
    error_no_keywords: "No keywords given. Use --keywords or --keywords-file",
    error_workbook: "Could not read workbook",
    error_report: "Could not write report",
    error_io: "I/O error",
};

pub static AZ: Labels = Labels {
    folder_name: "Qovluq Adı",
    file_name: "Fayl Adı",
    sheet_name: "Vərəq Adı",
    row_number: "Sətir Nömrəsi",
    keyword: "Açar Söz",
    column_b: "B Sütun Məzmunu",
    column_c: "C Sütun Məzmunu",
    column_d: "D Sütun Məzmunu",
    column_e: "E Sütun Məzmunu",
    report_sheet: "Uyğunluqlar",
    files_processed: "İşlənən Fayllar",
    sheets_processed: "İşlənən Vərəqlər",
    rows_processed: "İşlənən Sətirlər",
    matches_found: "Uyğunluqlar Tapıldı",
    started: "Ekstraksiya başladı... Gözləyin.",
    finished: "Ekstraksiya tamamlandı!",
    no_matches: "Heç bir uyğunluq tapılmadı.",
    missing_input: "Bütün məlumatları daxil edin!",
    document_error: "Xəta faylında",
    report_saved: "Çıxarış faylı",
    progress: "fayl işlənir",
    config_saved: "Parametrlər yadda saxlanıldı",
    config_title: "Parametrlər",
    config_locale: "Dil",
    config_upload_dir: "Yükləmə qovluğu",
    config_results_dir: "Nəticə qovluğu",
    error_config: "Konfiqurasiya xətası",
    error_file_not_found: "Fayl tapılmadı",
    error_folder_not_found: "Qovluq tapılmadı",
    error_no_documents: "Yoxlanılacaq Excel faylı yoxdur",
    error_no_keywords: "Açar söz daxil edilməyib. --keywords və ya --keywords-file istifadə edin",
    error_workbook: "Excel faylı oxunmadı",
    error_report: "Çıxarış faylı yazılmadı",
    error_io: "Giriş/çıxış xətası",
};

pub static JA: Labels = Labels {
    folder_name: "フォルダ名",
    file_name: "ファイル名",
    sheet_name: "シート名",
    row_number: "行番号",
    keyword: "キーワード",
    column_b: "B列の内容",
    column_c: "C列の内容",
    column_d: "D列の内容",
    column_e: "E列の内容",
    report_sheet: "抽出結果",
    files_processed: "処理ファイル数",
    sheets_processed: "処理シート数",
    rows_processed: "処理行数",
    matches_found: "一致件数",
    started: "抽出を開始しました... お待ちください。",
    finished: "抽出完了",
    no_matches: "一致する行はありませんでした。",
    missing_input: "ファイルとキーワードをすべて指定してください",
    document_error: "ファイル読み込みエラー",
    report_saved: "レポート出力",
    progress: "ファイル処理中",
    config_saved: "設定を保存しました",
    config_title: "設定",
    config_locale: "表示言語",
    config_upload_dir: "アップロード一時フォルダ",
    config_results_dir: "レポート出力先",
    error_config: "設定エラー",
    error_file_not_found: "ファイルが見つかりません",
    error_folder_not_found: "フォルダが見つかりません",
    error_no_documents: "スキャン対象のExcelファイルがありません",
    error_no_keywords: "キーワードが指定されていません。--keywords または --keywords-file を指定してください",
    error_workbook: "Excel読み込みエラー",
    error_report: "レポート生成エラー",
    error_io: "IOエラー",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("AZ".parse::<Locale>().unwrap(), Locale::Az);
        assert_eq!("japanese".parse::<Locale>().unwrap(), Locale::Ja);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_roundtrip() {
        for locale in [Locale::En, Locale::Az, Locale::Ja] {
            assert_eq!(locale.to_string().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn test_locale_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Locale::Az).unwrap(), "\"az\"");
        let locale: Locale = serde_json::from_str("\"ja\"").unwrap();
        assert_eq!(locale, Locale::Ja);
    }

    #[test]
    fn test_labels_selected_by_locale() {
        assert_eq!(Locale::En.labels().file_name, "File Name");
        assert_eq!(Locale::Az.labels().file_name, "Fayl Adı");
        assert_eq!(Locale::Ja.labels().file_name, "ファイル名");
    }

    /// 設定表示とエラー文言もロケールごとに切り替わる
    #[test]
    fn test_config_and_error_labels_localized() {
        assert_eq!(Locale::En.labels().config_saved, "Settings saved");
        assert_eq!(Locale::Az.labels().config_locale, "Dil");
        assert_eq!(Locale::Ja.labels().error_io, "IOエラー");

        for locale in [Locale::En, Locale::Az, Locale::Ja] {
            let labels = locale.labels();
            for text in [
                labels.config_saved,
                labels.config_title,
                labels.config_locale,
                labels.config_upload_dir,
                labels.config_results_dir,
                labels.error_config,
                labels.error_file_not_found,
                labels.error_folder_not_found,
                labels.error_no_documents,
                labels.error_no_keywords,
                labels.error_workbook,
                labels.error_report,
                labels.error_io,
            ] {
                assert!(!text.is_empty(), "{}: empty label", locale);
            }
            assert!(labels.error_no_keywords.contains("--keywords-file"));
        }

        assert_ne!(Locale::En.labels().error_workbook, Locale::Az.labels().error_workbook);
    }
}
