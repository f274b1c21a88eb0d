pub mod excel;

pub use excel::{report_file_name, write_report, write_report_at};
pub use keyword_extract_common::export::ReportLayout;
