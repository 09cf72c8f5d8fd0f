//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    age::AgeArgs, completions::CompletionsArgs, copy::CopyArgs, count::CountArgs, dept::DeptArgs,
    list::ListArgs, position::PositionArgs, reports::ReportsArgs, show::ShowArgs,
    workdays::WorkdaysArgs,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(author, version, about = "Personnel register toolkit")]
#[command(
    long_about = "A Unix-style toolkit for maintaining a personnel register as a plain-text tab-separated flat file, with indexed queries and reporting-line traversal."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Roster data file (falls back to config `roster_file`)
    #[arg(long, short = 'F', global = true, env = "ROSTER_FILE")]
    pub file: Option<PathBuf>,

    /// Output format (falls back to config `default_format`, then table)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all records in insertion order
    List(ListArgs),

    /// Print the number of records
    Count(CountArgs),

    /// Show one record by exact name
    Show(ShowArgs),

    /// List records by department, or list known departments
    Dept(DeptArgs),

    /// List records by position, or list known positions
    Position(PositionArgs),

    /// List records with age in an inclusive range
    Age(AgeArgs),

    /// List records working on any of the given days
    Workdays(WorkdaysArgs),

    /// Show all direct and transitive reports under a name
    Reports(ReportsArgs),

    /// Deep-copy the roster and save the copy to a file
    Copy(CopyArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

/// Output format for list-producing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
    /// JSON format (for programming)
    Json,
}
