pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod progress;
pub mod scanner;
pub mod setup;
pub mod workbook;
