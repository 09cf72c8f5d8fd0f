//! `roster list` command - all records in insertion order

use miette::Result;

use crate::cli::table::print_records;
use crate::cli::{helpers, GlobalOpts};
use crate::core::Record;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;

    let records: Vec<&Record> = match args.limit {
        Some(n) => roster.records().iter().take(n).collect(),
        None => roster.records().iter().collect(),
    };

    print_records(&records, helpers::resolve_format(global), global.quiet)
}
