use clap::Parser;
use miette::Result;
use roster::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::List(args) => roster::cli::commands::list::run(args, &global),
        Commands::Count(args) => roster::cli::commands::count::run(args, &global),
        Commands::Show(args) => roster::cli::commands::show::run(args, &global),
        Commands::Dept(args) => roster::cli::commands::dept::run(args, &global),
        Commands::Position(args) => roster::cli::commands::position::run(args, &global),
        Commands::Age(args) => roster::cli::commands::age::run(args, &global),
        Commands::Workdays(args) => roster::cli::commands::workdays::run(args, &global),
        Commands::Reports(args) => roster::cli::commands::reports::run(args, &global),
        Commands::Copy(args) => roster::cli::commands::copy::run(args, &global),
        Commands::Completions(args) => roster::cli::commands::completions::run(args),
    }
}
