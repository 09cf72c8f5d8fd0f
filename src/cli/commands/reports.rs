//! `roster reports` command - reporting-line tree under a name

use console::style;
use miette::{miette, Result};

use crate::cli::{helpers, GlobalOpts};
use crate::core::{HierarchyWalker, NO_SUPERVISOR};

#[derive(clap::Args, Debug)]
pub struct ReportsArgs {
    /// Full name, case-sensitive; pass "n/a" for the whole tree
    pub name: String,
}

pub fn run(args: ReportsArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    let entries = HierarchyWalker::new(&roster)
        .walk(&args.name)
        .map_err(|e| miette!("{}", e))?;

    if entries.is_empty() {
        if !global.quiet {
            println!("No reports under '{}'.", args.name);
        }
        return Ok(());
    }

    if !global.quiet {
        let header = if args.name == NO_SUPERVISOR {
            "Full reporting tree".to_string()
        } else {
            format!("Reports under {}", args.name)
        };
        println!("{}", style(header).bold());
    }
    for entry in &entries {
        println!("{}{}", "  ".repeat(entry.level - 1), entry.name);
    }
    Ok(())
}
