use clap::{Args, Parser, Subcommand};
use keyword_extract_common::Locale;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keyword-extract")]
#[command(about = "Excelファイル群のB列からキーワード一致行を抽出", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 表示言語 (en/az/ja)。省略時は設定ファイルの値
    #[arg(long, global = true)]
    pub locale: Option<Locale>,
}

/// キーワード指定（両方指定した場合は結合）
#[derive(Args, Debug, Clone)]
pub struct KeywordArgs {
    /// カンマ区切りのキーワード
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// 1行1キーワードのテキストファイル
    #[arg(short = 'f', long)]
    pub keywords_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 指定したExcelファイルを抽出（一時フォルダにコピーしてから読む）
    Extract {
        /// Excelファイル (.xls/.xlsx)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        keywords: KeywordArgs,

        /// レポート出力先フォルダ（デフォルト: 設定の results_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 1行目も照合対象にする（見出し行なし）
        #[arg(long)]
        no_header: bool,
    },

    /// フォルダ直下のExcelファイルを抽出
    Folder {
        /// 入力フォルダ
        #[arg(required = true)]
        source: PathBuf,

        /// レポート出力先フォルダ
        #[arg(required = true)]
        dest: PathBuf,

        #[command(flatten)]
        keywords: KeywordArgs,

        /// 1行目も照合対象にする（見出し行なし）
        #[arg(long)]
        no_header: bool,
    },

    /// 設定を表示/編集
    Config {
        /// 表示言語を設定
        #[arg(long)]
        set_locale: Option<Locale>,

        /// アップロード一時フォルダを設定
        #[arg(long)]
        set_upload_dir: Option<PathBuf>,

        /// レポート出力先を設定
        #[arg(long)]
        set_results_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
