use clap::Parser;
use keyword_extract::{cli, config, error, extract, progress, scanner, setup};
use cli::{Cli, Commands};
use config::Config;
use error::{ExtractError, Result};
use extract::{ExtractOptions, ExtractionSummary};
use keyword_extract_common::{Labels, ScanOptions};
use progress::ProgressReporter;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG が優先。--verbose で debug
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "keyword_extract=debug,keyword_extract_common=debug"
        } else {
            "warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let labels = cli.locale.unwrap_or_default().labels();
            eprintln!("✖ {}", e.describe(labels));
            return ExitCode::FAILURE;
        }
    };
    let labels = cli.locale.unwrap_or(config.locale).labels();

    match run(cli.command, config, labels) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // 入力不足は警告を出してから終了
            if matches!(e, ExtractError::NoDocuments(_) | ExtractError::NoKeywords) {
                println!("⚠ {}", labels.missing_input);
            }
            eprintln!("✖ {}", e.describe(labels));
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: Config, labels: &'static Labels) -> Result<()> {
    match command {
        Commands::Extract { files, keywords, output, no_header } => {
            println!("📊 keyword-extract\n");

            let keyword_set =
                extract::load_keywords(keywords.keywords.as_deref(), keywords.keywords_file.as_deref())?;

            setup::ensure_workspace(&config)?;

            let uploads = files
                .iter()
                .map(|path| scanner::UploadedFile::from_path(path))
                .collect::<Result<Vec<_>>>()?;

            let output_dir = output.unwrap_or_else(|| config.results_dir.clone());
            let options = ExtractOptions {
                keywords: &keyword_set,
                labels,
                scan: ScanOptions { header_row: !no_header },
            };

            println!("{}", labels.started);
            let mut reporter = ProgressReporter::new(labels);
            let summary =
                extract::run_uploads(&uploads, &config.upload_dir, &output_dir, options, &mut reporter)?;
            drop(reporter);

            print_summary(labels, &summary);
        }

        Commands::Folder { source, dest, keywords, no_header } => {
            println!("📂 keyword-extract\n");

            let keyword_set =
                extract::load_keywords(keywords.keywords.as_deref(), keywords.keywords_file.as_deref())?;

            let options = ExtractOptions {
                keywords: &keyword_set,
                labels,
                scan: ScanOptions { header_row: !no_header },
            };

            println!("{}", labels.started);
            let mut reporter = ProgressReporter::new(labels);
            let summary = extract::run_folder(&source, &dest, options, &mut reporter)?;
            drop(reporter);

            print_summary(labels, &summary);
        }

        Commands::Config { set_locale, set_upload_dir, set_results_dir, show } => {
            let mut config = config;
            let changed = set_locale.is_some() || set_upload_dir.is_some() || set_results_dir.is_some();

            if let Some(locale) = set_locale {
                config.locale = locale;
            }
            if let Some(dir) = set_upload_dir {
                config.upload_dir = dir;
            }
            if let Some(dir) = set_results_dir {
                config.results_dir = dir;
            }

            if changed {
                config.save()?;
                println!("✔ {}: {}", labels.config_saved, Config::config_path()?.display());
            }

            if show || !changed {
                println!("{}:", labels.config_title);
                println!("  {}: {}", labels.config_locale, config.locale);
                println!("  {}: {}", labels.config_upload_dir, config.upload_dir.display());
                println!("  {}: {}", labels.config_results_dir, config.results_dir.display());
            }
        }
    }

    Ok(())
}

fn print_summary(labels: &Labels, summary: &ExtractionSummary) {
    let stats = &summary.outcome.stats;

    println!("\n✅ {}", labels.finished);
    println!("  {}: {}", labels.files_processed, stats.files_processed);
    println!("  {}: {}", labels.sheets_processed, stats.sheets_processed);
    println!("  {}: {}", labels.rows_processed, stats.rows_processed);
    println!("  {}: {}", labels.matches_found, stats.matches_found);

    match &summary.report {
        Some(path) => println!("\n✔ {}: {}", labels.report_saved, path.display()),
        None => println!("\n⚠ {}", labels.no_matches),
    }
}
