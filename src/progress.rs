//! 進捗表示（indicatif）

use indicatif::{ProgressBar, ProgressStyle};
use keyword_extract_common::{DocumentError, Labels, ScanObserver};

pub struct ProgressReporter {
    bar: ProgressBar,
    labels: &'static Labels,
}

impl ProgressReporter {
    pub fn new(labels: &'static Labels) -> Self {
        let bar = ProgressBar::new(0);
        let style = ProgressStyle::with_template("{bar:40.green/white} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar, labels }
    }
}

impl ScanObserver for ProgressReporter {
    fn document_finished(&mut self, position: usize, total: usize, file_name: &str) {
        self.bar.set_length(total as u64);
        self.bar.set_position(position as u64);
        self.bar
            .set_message(format!("{} {}", self.labels.progress, file_name));
        if position == total {
            self.bar.finish_and_clear();
        }
    }

    fn document_failed(&mut self, error: &DocumentError) {
        // 端末でなくても表示されるよう suspend 経由で出力
        self.bar.suspend(|| {
            eprintln!(
                "✖ {} {}: {}",
                self.labels.document_error, error.file_name, error.message
            );
        });
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
