// SPDX-License-Identifier: PMPL-1.0-or-later

//! swad-action-labels: inspect the compiled action label table
//!
//! Resolves action labels in the configured language, lists the table with
//! coverage per language and tab, and runs a self-check of the compiled data.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use std::path::PathBuf;
use swad_action_labels::catalog::{Action, Tab};
use swad_action_labels::config::Config;
use swad_action_labels::diagnostics;
use swad_action_labels::i18n::Language;
use swad_action_labels::report::{
    self, language_rows, Coverage, LabelListing, ListingFilter, ReportFormatter,
    ReportOutputFormat,
};

#[derive(Parser)]
#[command(name = "swad-action-labels")]
#[command(version)]
#[command(about = "Action labels of the SWAD platform in every supported language")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./swad-action-labels.yaml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Active language: ISO code, platform number or English name
    #[arg(short, long, global = true, value_name = "LANG")]
    lang: Option<Language>,

    /// Debug logging (ignores RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the label of each action in the active language
    Resolve {
        /// Action identifiers (e.g. ActSeeSysInf) or catalog indexes
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<String>,

        /// Language to use when the active one has no translation
        #[arg(long, value_name = "LANG")]
        fallback: Option<Language>,
    },

    /// List actions with their labels
    List {
        /// Only actions of this tab
        #[arg(short, long, value_parser = parse_tab)]
        tab: Option<Tab>,

        /// Only actions without a translation
        #[arg(short, long)]
        missing: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,

        /// Save the listing to a .json or .yaml file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Translation coverage per language and tab
    Coverage {
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,

        /// Save the report to a .json or .yaml file instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Supported languages with their codes and names
    Languages {
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportOutputFormat,
    },

    /// Check the compiled table and the configuration
    Check,
}

fn parse_tab(value: &str) -> std::result::Result<Tab, String> {
    Tab::from_key(&value.to_ascii_lowercase()).ok_or_else(|| {
        let keys: Vec<&str> = Tab::all().iter().map(|tab| tab.key()).collect();
        format!("unknown tab '{}', expected one of: {}", value, keys.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::builder().filter_level(LevelFilter::Debug).init();
    } else {
        env_logger::init();
    }

    let config = Config::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_language(cli.lang);
    debug!("active language {}", config.language);

    match cli.command {
        Commands::Resolve { actions, fallback } => {
            let table = config.install()?;
            let fallback = fallback.or(config.fallback);
            for selector in &actions {
                let action = Action::parse_selector(selector)?;
                let text = match fallback {
                    Some(language) => table.resolve_or(action, language),
                    None => table.resolve(action),
                };
                println!("{}", text);
            }
        }

        Commands::List {
            tab,
            missing,
            format,
            output,
        } => {
            let table = config.install()?;
            let filter = ListingFilter {
                tab,
                missing_only: missing,
            };
            let listing = LabelListing::build(table, &filter);
            match output {
                Some(path) => ReportFormatter::new().save(&listing, path)?,
                None => report::emit(format, &listing, |formatter, listing| {
                    formatter.print_listing(listing)
                })?,
            }
        }

        Commands::Coverage { format, output } => {
            let coverage = Coverage::compute();
            match output {
                Some(path) => ReportFormatter::new().save(&coverage, path)?,
                None => report::emit(format, &coverage, |formatter, coverage| {
                    formatter.print_coverage(coverage)
                })?,
            }
        }

        Commands::Languages { format } => {
            let rows = language_rows(config.language);
            report::emit(format, &rows, |formatter, rows| {
                formatter.print_languages(rows)
            })?;
        }

        Commands::Check => {
            diagnostics::run_self_check(cli.config.as_deref())?;
        }
    }

    Ok(())
}
