//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::checks::{self, CheckSpec};
use crate::config::Profile;
use crate::core::model::{ResultItem, ResultSet, Status};
use crate::core::render::{OutputFormat, RenderConfig, Renderer};
use crate::document::{self, extract, Document};

const SKIP_REASON: &str = "README not found at repository root; skipping README validation";

/// readmecheck - validate the structure and content of a project README.
#[derive(Parser, Debug)]
#[command(name = "readmecheck")]
#[command(
    author,
    version,
    about,
    long_about = r#"readmecheck locates the README at a repository root and runs a fixed set of
independent checks against it: title and intro facts, section anchors and the
table of contents, core feature items, image references, the engineer guide
link, and contact emails.

Each command prints a ResultSet in the selected format (default: jsonl).

Output formats:
- jsonl: one JSON object per line (best for piping into tools)
- json: a single JSON array
- md: human-friendly Markdown
- text: a compact PASS/FAIL listing

Exit status: 0 when every check passes or no README exists (skipped),
1 when any check fails, 2 on usage or configuration errors.

Examples:
    readmecheck check
    readmecheck --format text check --only images --only contact-emails
    readmecheck --root ../app locate
    readmecheck inspect --pretty
"#
)]
pub struct Cli {
    /// Repository root holding the README.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Repository root holding the README (defaults to the current directory).\n\n\
Emitted paths are relative to this root."
    )]
    pub root: PathBuf,

    /// Output format (jsonl/json/md/text).
    #[arg(long, global = true, default_value = "jsonl", value_name = "FORMAT")]
    pub format: String,

    /// Profile file overriding the default expectations (JSON).
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "READMECHECK_CONFIG",
        long_help = "JSON profile overriding any subset of the default expectations.\n\n\
If omitted, ROOT/.readmecheck.json is used when present, otherwise the built-in\n\
defaults."
    )]
    pub config: Option<PathBuf>,

    /// Disable colored output (when applicable).
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the README checks.
    #[command(
        long_about = "Locate the README under ROOT and run every check (or the ones named\n\
with --only). One result item is emitted per check; failed checks list each\n\
violated expectation with a code, a message and, when known, a line number.\n\n\
If no README exists the run is skipped, not failed.\n\n\
Examples:\n\
  readmecheck check\n\
  readmecheck check --only sections-toc\n"
    )]
    Check {
        /// Only run the named check (repeatable).
        #[arg(
            long,
            value_name = "ID",
            value_parser = PossibleValuesParser::new(checks::ids()),
        )]
        only: Vec<String>,
    },

    /// List the available checks.
    List,

    /// Show which README file would be validated.
    Locate,

    /// Dump what the extractors see (anchors, TOC ids, images, links, emails).
    #[command(
        long_about = "Emit the extracted data model of the README as a structured payload.\n\
Use this to debug why a check disagrees with what you see in the file."
    )]
    Inspect,
}

/// Install the stderr log subscriber
pub fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<ExitCode> {
    let format: OutputFormat = cli
        .format
        .parse()
        .map_err(anyhow::Error::msg)
        .context("invalid --format")?;
    let color = !cli.no_color && std::io::stdout().is_terminal();
    let render_config = RenderConfig::new(format)
        .with_pretty(cli.pretty)
        .with_color(color);

    let root = cli.root.canonicalize().unwrap_or(cli.root);
    let profile = Profile::resolve(&root, cli.config.as_deref())
        .context("failed to load check profile")?;

    match cli.command {
        Commands::Check { only } => run_check(&root, &profile, &only, render_config),
        Commands::List => {
            emit(&list_checks(), render_config);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Locate => run_locate(&root, &profile, render_config),
        Commands::Inspect => run_inspect(&root, &profile, render_config),
    }
}

fn emit(result_set: &ResultSet, config: RenderConfig) {
    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(result_set));
}

fn load_document(root: &Path, profile: &Profile) -> Result<Option<Document>> {
    document::load(root, &profile.candidates).context("failed to read README")
}

fn run_check(
    root: &Path,
    profile: &Profile,
    only: &[String],
    config: RenderConfig,
) -> Result<ExitCode> {
    let selected: Vec<&CheckSpec> = only.iter().filter_map(|id| checks::find(id)).collect();

    let Some(doc) = load_document(root, profile)? else {
        emit(&ResultSet::from_iter([ResultItem::skip(SKIP_REASON)]), config);
        return Ok(ExitCode::SUCCESS);
    };

    let reports = checks::run_checks(&doc, profile, &selected);
    let result_set: ResultSet = reports.iter().map(|r| r.to_result_item(&doc)).collect();
    emit(&result_set, config);

    if result_set.has_failures() {
        let failed: Vec<&str> = reports.iter().filter(|r| !r.passed()).map(|r| r.id).collect();
        tracing::info!(
            failed = ?failed,
            count = result_set.count(Status::Fail),
            total = reports.len(),
            "README checks failed"
        );
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn list_checks() -> ResultSet {
    checks::CHECKS
        .iter()
        .map(|spec| ResultItem::info(spec.description).with_check(spec.id))
        .collect()
}

fn run_locate(root: &Path, profile: &Profile, config: RenderConfig) -> Result<ExitCode> {
    let item = match load_document(root, profile)? {
        Some(doc) => ResultItem::document(doc.rel_path.clone(), doc.meta()).with_data(json!({
            "absolute": doc.path.display().to_string(),
            "candidates": profile.candidates,
        })),
        None => ResultItem::skip(SKIP_REASON),
    };
    emit(&ResultSet::from_iter([item]), config);
    Ok(ExitCode::SUCCESS)
}

fn run_inspect(root: &Path, profile: &Profile, config: RenderConfig) -> Result<ExitCode> {
    let Some(doc) = load_document(root, profile)? else {
        emit(&ResultSet::from_iter([ResultItem::skip(SKIP_REASON)]), config);
        return Ok(ExitCode::SUCCESS);
    };

    let toc_ids = extract::summary_regex(&profile.toc_summary)
        .map(|re| extract::toc_ids(&doc.text, &re))
        .unwrap_or_default();
    let emails = extract::section_after_heading(&doc.text, &profile.contact_label)
        .map(|(offset, body)| extract::email_tokens(&doc.text, offset, body))
        .unwrap_or_default();

    let data = json!({
        "anchors": extract::anchor_ids(&doc.text),
        "toc_ids": toc_ids,
        "images": extract::images(&doc.text),
        "links": extract::links(&doc.text),
        "feature_items": extract::feature_item_count(&doc.text),
        "contact_emails": emails,
    });

    let item = ResultItem::document(doc.rel_path.clone(), doc.meta()).with_data(data);
    emit(&ResultSet::from_iter([item]), config);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_only() {
        let cli = Cli::try_parse_from([
            "readmecheck",
            "--format",
            "text",
            "check",
            "--only",
            "images",
            "--only",
            "guide-link",
        ])
        .unwrap();
        match cli.command {
            Commands::Check { only } => assert_eq!(only, vec!["images", "guide-link"]),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.format, "text");
    }

    #[test]
    fn test_unknown_check_is_usage_error() {
        let err = Cli::try_parse_from(["readmecheck", "check", "--only", "spelling"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_list_checks_covers_registry() {
        let set = list_checks();
        assert_eq!(set.items.len(), checks::CHECKS.len());
        assert_eq!(set.items[0].check.as_deref(), Some("title-intro"));
    }
}
