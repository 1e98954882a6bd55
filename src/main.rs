//! Conformity CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use conformity::cli::{CheckCommand, Cli};
use conformity::ui::{should_use_colors, TextReporter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the stderr log subscriber.
///
/// `--debug` wins over `RUST_LOG`; without either only warnings are shown.
/// Stdout is reserved for the report.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("conformity=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conformity=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Conformity starting with args: {:?}", cli);

    let colors = !cli.no_color && should_use_colors();
    console::set_colors_enabled(colors);

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let command = CheckCommand::new(&project_root, &cli);
    let mut reporter = TextReporter::stdout(colors);

    match command.execute(&mut reporter) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
