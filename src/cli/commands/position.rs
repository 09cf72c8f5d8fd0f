//! `roster position` command - records by position

use console::style;
use miette::{miette, Result};

use crate::cli::table::print_records;
use crate::cli::{helpers, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct PositionArgs {
    /// Position, case-sensitive; omit to list known positions
    pub value: Option<String>,
}

pub fn run(args: PositionArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;

    let Some(value) = args.value else {
        let mut keys: Vec<&str> = roster.positions().collect();
        keys.sort_unstable();
        println!("{}", keys.join("\n"));
        return Ok(());
    };

    let records = roster.by_position(&value).map_err(|e| miette!("{}", e))?;
    let format = helpers::resolve_format(global);
    if !global.quiet && format == crate::cli::OutputFormat::Table {
        println!("{}", style(format!("Position: {}", value)).bold());
    }
    print_records(&records, format, global.quiet)
}
