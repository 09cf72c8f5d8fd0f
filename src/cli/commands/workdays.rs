//! `roster workdays` command - records working on any of the given days

use miette::Result;

use crate::cli::table::print_records;
use crate::cli::{helpers, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct WorkdaysArgs {
    /// Day labels, case-sensitive (e.g. Mon Wed Fri)
    #[arg(required = true)]
    pub days: Vec<String>,
}

pub fn run(args: WorkdaysArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    // Membership query: the result is an unordered, duplicate-free set
    let records = roster.by_any_workday(args.days.iter().map(String::as_str));
    print_records(&records, helpers::resolve_format(global), global.quiet)
}
