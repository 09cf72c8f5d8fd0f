//! `roster count` command - number of records

use miette::Result;

use crate::cli::{helpers, GlobalOpts};

#[derive(clap::Args, Debug)]
pub struct CountArgs {}

pub fn run(_args: CountArgs, global: &GlobalOpts) -> Result<()> {
    let roster = helpers::load_roster(global)?;
    println!("{}", roster.len());
    Ok(())
}
