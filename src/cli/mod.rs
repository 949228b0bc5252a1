//! Command-line parsing for the quote tool.
//!
//! The goal of this module is to keep argument parsing and command dispatch
//! separate from the pricing and layout code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Modality, QuoteRequest};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "cotiza",
    version,
    about = "Cotizador CONOCER & DC-3 (Clínica Salud Industrial)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the competency standards and their per-participant prices.
    Standards,
    /// Print the quote and the comparative tiers.
    Quote(QuoteArgs),
    /// Save the quote as a PDF.
    ///
    /// Incomplete selections write nothing.
    Export(ExportArgs),
    /// Print a quote previously saved with `quote --json`.
    Show(ShowArgs),
}

/// The three quote inputs. Any of them may be left out.
#[derive(Debug, Args, Clone)]
pub struct SelectionArgs {
    /// Standard code (e.g. EC0680).
    #[arg(short = 's', long)]
    pub standard: Option<String>,

    /// Delivery modality.
    #[arg(short = 'm', long, value_enum)]
    pub modality: Option<Modality>,

    /// Number of participants.
    #[arg(short = 'n', long, default_value_t = 1)]
    pub participants: u32,
}

impl SelectionArgs {
    pub fn to_request(&self) -> QuoteRequest {
        QuoteRequest::new(self.standard.as_deref(), self.modality, self.participants)
    }
}

#[derive(Debug, Args, Clone)]
pub struct QuoteArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Also draw the comparative bar chart.
    #[arg(long)]
    pub chart: bool,

    /// Chart width (columns for the longest bar, 1-200).
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u16).range(1..=200))]
    pub chart_width: u16,

    /// Write the quote summary to JSON.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output directory (default: $COTIZA_OUTPUT_DIR, else the current directory).
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Quote JSON written by `quote --json`.
    #[arg(value_name = "JSON")]
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_flags() {
        let cli = Cli::parse_from([
            "cotiza", "export", "-s", "EC0680", "-m", "presencial", "-n", "3", "-o", "out",
        ]);
        let Command::Export(args) = cli.command else {
            panic!("expected export");
        };
        let req = args.selection.to_request();
        assert_eq!(req.standard.as_deref(), Some("EC0680"));
        assert_eq!(req.modality, Some(Modality::Presencial));
        assert_eq!(req.participants, 3);
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn selection_defaults_to_one_participant() {
        let cli = Cli::parse_from(["cotiza", "quote", "-m", "hibrido"]);
        let Command::Quote(args) = cli.command else {
            panic!("expected quote");
        };
        assert_eq!(args.selection.standard, None);
        assert_eq!(args.selection.participants, 1);
        assert!(!args.chart);
        assert_eq!(args.chart_width, 40);
    }

    #[test]
    fn chart_width_is_bounded() {
        assert!(Cli::try_parse_from(["cotiza", "quote", "--chart-width", "200"]).is_ok());
        assert!(Cli::try_parse_from(["cotiza", "quote", "--chart-width", "201"]).is_err());
        assert!(Cli::try_parse_from(["cotiza", "quote", "--chart-width", "0"]).is_err());
        assert!(
            Cli::try_parse_from(["cotiza", "quote", "--chart-width", "18446744073709551615"]).is_err()
        );
    }

    #[test]
    fn parses_show_path() {
        let cli = Cli::parse_from(["cotiza", "show", "quote.json"]);
        let Command::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.path, PathBuf::from("quote.json"));
    }
}
