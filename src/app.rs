//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - validates the built-in catalog (fatal if misconfigured)
//! - parses CLI arguments
//! - runs the quote pipeline
//! - prints results and writes optional exports
//! - re-prints saved quote files

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::catalog::{CatalogStore, catalog};
use crate::cli::{Command, ExportArgs, QuoteArgs, ShowArgs};
use crate::error::AppError;
use crate::io::quote::{QuoteFile, read_quote_json, write_quote_json};
use crate::quote::compute_quote;
use crate::report::chart::render_variant_chart;
use crate::report::format::{format_quote_summary, format_standards};

pub mod pipeline;

/// Environment variable naming the default export directory.
pub const OUTPUT_DIR_ENV: &str = "COTIZA_OUTPUT_DIR";

const INCOMPLETE_NOTICE: &str =
    "Incomplete selection: choose a known standard (-s), a modality (-m) and at least one participant (-n).";

/// Entry point for the `cotiza` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_logging();

    let catalog = catalog()?;

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Standards => {
            print!("{}", format_standards(catalog));
            Ok(())
        }
        Command::Quote(args) => handle_quote(catalog, args),
        Command::Export(args) => handle_export(catalog, args),
        Command::Show(args) => handle_show(catalog, args),
    }
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_quote(catalog: &CatalogStore, args: QuoteArgs) -> Result<(), AppError> {
    let run = pipeline::run_quote(catalog, args.selection.to_request());

    match &run.selection {
        Some(sel) if run.is_complete() => {
            println!(
                "{}",
                format_quote_summary(sel.standard, sel.modality, sel.participants, &run.result, &run.variants)
            );
            if args.chart {
                println!(
                    "{}",
                    render_variant_chart(&run.variants, usize::from(args.chart_width))
                );
            }
        }
        _ => {
            warn_unknown_code(catalog, args.selection.standard.as_deref());
            println!("{INCOMPLETE_NOTICE}");
        }
    }

    if let Some(path) = &args.json {
        let standard = run.selection.as_ref().map(|s| s.standard);
        let quote = QuoteFile::new(&run.request, standard, run.result, run.variants);
        write_quote_json(path, &quote)?;
    }

    Ok(())
}

fn handle_export(catalog: &CatalogStore, args: ExportArgs) -> Result<(), AppError> {
    let dir = output_dir_from_args(&args);
    match pipeline::export_quote(catalog, args.selection.to_request(), &dir)? {
        Some(path) => println!("Cotización guardada en {}", path.display()),
        None => {
            warn_unknown_code(catalog, args.selection.standard.as_deref());
            println!("{INCOMPLETE_NOTICE}");
        }
    }
    Ok(())
}

fn handle_show(catalog: &CatalogStore, args: ShowArgs) -> Result<(), AppError> {
    let quote = read_quote_json(&args.path)?;
    let standard = quote
        .standard
        .as_ref()
        .and_then(|s| catalog.standard_by_code(&s.code));

    match (standard, quote.request.modality) {
        (Some(standard), Some(modality)) if quote.result.is_complete() => {
            let current = compute_quote(catalog, &quote.request);
            if current != quote.result {
                warn!(
                    path = %args.path.display(),
                    saved = quote.result.total_price,
                    current = current.total_price,
                    "saved quote differs from current rates"
                );
            }
            println!(
                "{}",
                format_quote_summary(
                    standard,
                    modality,
                    quote.request.participants,
                    &quote.result,
                    &quote.variants
                )
            );
        }
        _ => println!("{INCOMPLETE_NOTICE}"),
    }
    Ok(())
}

fn warn_unknown_code(catalog: &CatalogStore, code: Option<&str>) {
    match code {
        Some(code) if catalog.standard_by_code(code).is_none() => {
            warn!(code, "unknown standard code");
        }
        _ => {}
    }
}

/// `-o` wins, then `$COTIZA_OUTPUT_DIR`, then the current directory.
pub fn output_dir_from_args(args: &ExportArgs) -> PathBuf {
    args.output_dir
        .clone()
        .or_else(|| std::env::var_os(OUTPUT_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Rewrite argv so bare invocations do something useful.
///
/// Rules:
/// - `cotiza`                       -> `cotiza standards`
/// - `cotiza -s EC0680 ...`         -> `cotiza quote -s EC0680 ...`
/// - `cotiza --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("standards".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "standards" | "quote" | "export" | "show");
    if is_subcommand {
        return argv;
    }

    // A leading flag means "quote with these flags".
    if arg1.starts_with('-') {
        argv.insert(1, "quote".to_string());
        return argv;
    }

    argv
}
