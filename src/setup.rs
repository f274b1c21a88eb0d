//! 作業フォルダの準備
//!
//! アップロードの一時置き場とレポート出力先を作成する。スキャン前に1回だけ呼ぶ。

use crate::config::Config;
use crate::error::Result;
use tracing::debug;

pub fn ensure_workspace(config: &Config) -> Result<()> {
    for dir in [&config.upload_dir, &config.results_dir] {
        std::fs::create_dir_all(dir)?;
        debug!(dir = %dir.display(), "workspace directory ready");
    }
    Ok(())
}
