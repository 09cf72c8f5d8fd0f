//! `roster show` command - one record by exact name

use miette::{miette, Result};

use crate::cli::table::print_record_detail;
use crate::cli::{helpers, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Full name, case-sensitive (e.g. "John Smith")
    pub name: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    let record = roster
        .by_name(&args.name)
        .map_err(|e| miette!("{}", e))?;
    print_record_detail(record);
    Ok(())
}
