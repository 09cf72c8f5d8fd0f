//! `roster copy` command - deep-copy the roster and save the copy
//!
//! The copy is a fully independent roster (fresh records, indices rebuilt
//! by replaying inserts); what lands on disk is the copy, not the source.

use std::path::PathBuf;

use console::style;
use miette::{miette, Result};

use crate::cli::{helpers, GlobalOpts};
use crate::core::flatfile;

#[derive(clap::Args, Debug)]
pub struct CopyArgs {
    /// Destination file for the copied roster
    #[arg(long, short = 't')]
    pub to: PathBuf,
}

pub fn run(args: CopyArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    let copy = roster.deep_copy();

    flatfile::save_path(&args.to, &copy)
        .map_err(|e| miette!("failed to save roster to '{}': {}", args.to.display(), e))?;

    if !global.quiet {
        println!(
            "{} Copied {} record(s) to '{}'",
            style("✓").green(),
            copy.len(),
            args.to.display()
        );
    }
    Ok(())
}
