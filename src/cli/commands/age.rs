//! `roster age` command - records with age in an inclusive range

use miette::Result;

use crate::cli::table::print_records;
use crate::cli::{helpers, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct AgeArgs {
    /// Lower bound, inclusive
    pub low: u32,

    /// Upper bound, inclusive
    pub high: u32,
}

pub fn run(args: AgeArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    // Inverted bounds are a valid query with an empty answer
    let records = roster.in_age_range(args.low, args.high);
    print_records(&records, helpers::resolve_format(global), global.quiet)
}
