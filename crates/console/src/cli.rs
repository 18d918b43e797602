//! Command-line argument parsing for awx-console.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Build the initial draft from field flags.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing (handled by `awx_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Field flags pre-fill the interactive form and fully define the headless draft.

use std::path::PathBuf;

use awx_client::{InventorySourceDraft, NamedRef, Verbosity};
use clap::{Parser, ValueEnum};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for awx-console.
///
/// Connection precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url)
/// 2. Environment variables (e.g., AWX_BASE_URL), including `.env`
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "awx-console",
    about = "Create AWX inventory sources from the terminal",
    version,
    after_help = "Examples:\n  awx-console --inventory 2\n  awx-console --inventory 2 --name 'EC2 hosts' --source ec2 --credential 7\n  awx-console --inventory 2 --no-tui --name ops --source scm --project 9 --source-path hosts.yml\n  awx-console --inventory 2 --no-tui --cancel\n"
)]
pub struct Cli {
    /// Id of the parent inventory
    #[arg(long, short = 'i')]
    pub inventory: u64,

    /// Display name of the parent inventory
    #[arg(long)]
    pub inventory_name: Option<String>,

    /// AWX base URL (overrides AWX_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Username for basic auth (overrides AWX_USERNAME)
    #[arg(long, short = 'u')]
    pub username: Option<String>,

    /// Skip TLS certificate verification (overrides AWX_SKIP_VERIFY)
    #[arg(long)]
    pub skip_verify: bool,

    /// Run without the terminal UI: submit the draft built from flags and exit
    #[arg(long)]
    pub no_tui: bool,

    /// With --no-tui, leave the form without saving
    #[arg(long, requires = "no_tui")]
    pub cancel: bool,

    /// Directory for log files in interactive mode
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Source name
    #[arg(long)]
    pub name: Option<String>,

    /// Source description
    #[arg(long)]
    pub description: Option<String>,

    /// Source kind, one of the server's choices (e.g. scm, ec2)
    #[arg(long)]
    pub source: Option<String>,

    /// Inventory file inside the project, for scm sources
    #[arg(long)]
    pub source_path: Option<String>,

    /// Project id, for scm sources
    #[arg(long)]
    pub project: Option<u64>,

    /// Credential id
    #[arg(long)]
    pub credential: Option<u64>,

    /// Execution environment id the inventory update runs in
    #[arg(long)]
    pub execution_environment: Option<u64>,

    /// Source variables as YAML or JSON
    #[arg(long)]
    pub source_vars: Option<String>,

    /// Update the inventory before each job launch
    #[arg(long)]
    pub update_on_launch: bool,

    /// Seconds a completed update stays current
    #[arg(long, default_value_t = 0)]
    pub update_cache_timeout: u32,

    /// Remove hosts and groups no longer present in the source
    #[arg(long)]
    pub overwrite: bool,

    /// Replace variables instead of merging them
    #[arg(long)]
    pub overwrite_vars: bool,

    /// Update job verbosity: 0 (WARNING), 1 (INFO), 2 (DEBUG)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub verbosity: u8,
}

impl Cli {
    /// The parent inventory reference.
    pub fn inventory_ref(&self) -> NamedRef {
        NamedRef::new(self.inventory, self.inventory_name.clone().unwrap_or_default())
    }

    /// Draft built from the field flags.
    pub fn draft(&self) -> InventorySourceDraft {
        InventorySourceDraft {
            name: self.name.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            source: self.source.clone().unwrap_or_default(),
            source_path: self.source_path.clone().unwrap_or_default(),
            source_project: self.project.map(|id| NamedRef::new(id, String::new())),
            credential: self.credential.map(|id| NamedRef::new(id, String::new())),
            // Custom inventory scripts are not offered for new sources.
            source_script: None,
            execution_environment: self.execution_environment,
            source_vars: self
                .source_vars
                .clone()
                .unwrap_or_else(|| InventorySourceDraft::default().source_vars),
            update_on_launch: self.update_on_launch,
            update_cache_timeout: self.update_cache_timeout,
            overwrite: self.overwrite,
            overwrite_vars: self.overwrite_vars,
            verbosity: Verbosity::try_from(self.verbosity).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_inventory_required() {
        assert!(Cli::try_parse_from(["awx-console"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["awx-console", "--inventory", "2"]);
        assert!(!cli.no_tui);
        assert_eq!(cli.log_format, LogFormat::Text);

        let draft = cli.draft();
        assert_eq!(draft, InventorySourceDraft::default());
        assert_eq!(cli.inventory_ref(), NamedRef::new(2, ""));
    }

    #[test]
    fn test_draft_from_flags() {
        let cli = Cli::parse_from([
            "awx-console",
            "-i",
            "2",
            "--name",
            "ops",
            "--source",
            "scm",
            "--project",
            "999",
            "--credential",
            "222",
            "--source-path",
            "hosts.yml",
            "--verbosity",
            "2",
            "--overwrite",
        ]);
        let draft = cli.draft();

        assert_eq!(draft.name, "ops");
        assert_eq!(draft.source_project.map(|p| p.id), Some(999));
        assert_eq!(draft.credential.map(|c| c.id), Some(222));
        assert_eq!(draft.verbosity, Verbosity::Debug);
        assert!(draft.overwrite);
        assert_eq!(draft.source_script, None);
        assert_eq!(draft.execution_environment, None);
    }

    #[test]
    fn test_execution_environment_flag() {
        let cli = Cli::parse_from([
            "awx-console",
            "-i",
            "2",
            "--execution-environment",
            "4",
        ]);
        let draft = cli.draft();

        assert_eq!(draft.execution_environment, Some(4));
        assert_eq!(
            awx_client::flatten_references(&draft, 2).execution_environment,
            Some(4)
        );
    }

    #[test]
    fn test_cancel_requires_no_tui() {
        assert!(Cli::try_parse_from(["awx-console", "-i", "2", "--cancel"]).is_err());
        let cli = Cli::parse_from(["awx-console", "-i", "2", "--no-tui", "--cancel"]);
        assert!(cli.cancel);
    }

    #[test]
    fn test_verbosity_range() {
        assert!(Cli::try_parse_from(["awx-console", "-i", "2", "--verbosity", "3"]).is_err());
    }

    #[test]
    fn test_json_log_format() {
        let cli = Cli::parse_from(["awx-console", "-i", "2", "--log-format", "json"]);
        assert_eq!(cli.log_format, LogFormat::Json);
    }
}
