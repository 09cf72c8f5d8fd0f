//! Record list rendering for CLI commands
//!
//! One place for the table/tsv/csv/json output paths so every
//! list-producing command prints records the same way.

use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::escape_csv;
use crate::cli::OutputFormat;
use crate::core::Record;

const COLUMNS: [&str; 6] = ["Name", "Age", "Department", "Position", "Supervisor", "Workdays"];

fn row(record: &Record) -> [String; 6] {
    [
        record.name().to_string(),
        record.age().to_string(),
        record.department().to_string(),
        record.position().to_string(),
        record.supervisor().to_string(),
        record.workdays().join(" "),
    ]
}

/// Print a list of records in the requested format.
///
/// Table output appends a styled summary line unless `quiet` is set; the
/// machine formats stay summary-free for pipability.
pub fn print_records(records: &[&Record], format: OutputFormat, quiet: bool) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let mut builder = Builder::default();
            builder.push_record(COLUMNS);
            for record in records {
                builder.push_record(row(record));
            }
            println!("{}", builder.build().with(Style::sharp()));
            if !quiet {
                println!("{}", style(format!("Found: {} record(s)", records.len())).green());
            }
        }
        OutputFormat::Tsv => {
            for record in records {
                println!("{}", row(record).join("\t"));
            }
        }
        OutputFormat::Csv => {
            println!("{}", COLUMNS.join(","));
            for record in records {
                let fields: Vec<String> = row(record).iter().map(|f| escape_csv(f)).collect();
                println!("{}", fields.join(","));
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(records).into_diagnostic()?
            );
        }
    }
    Ok(())
}

/// Print one record as aligned key/value lines.
pub fn print_record_detail(record: &Record) {
    println!("{} {}", style("Name:").bold(), record.name());
    println!("{} {}", style("Age:").bold(), record.age());
    println!("{} {}", style("Department:").bold(), record.department());
    println!("{} {}", style("Position:").bold(), record.position());
    println!("{} {}", style("Supervisor:").bold(), record.supervisor());
    println!("{} {}", style("Workdays:").bold(), record.workdays().join(" "));
}
