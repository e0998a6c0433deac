//! pyramid CLI
//!
//! Prints the prefix sum of squares for the index given on the command line.

use clap::Parser as ClapParser;
use std::ffi::OsString;
use std::io;
use std::process;

/// The first argument is always the index, whatever it looks like, so
/// clap's own help/version flags are off and hyphenated text is a value.
/// Arguments after the index are ignored.
#[derive(ClapParser)]
#[command(name = "pyramid")]
#[command(about = "Print 0² + 1² + ... + n² for an index n in 0..=1000", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Index into the prefix-square table (0 to 1000)
    #[arg(allow_hyphen_values = true)]
    index: Option<OsString>,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pyramid=warn")),
        )
        .with_writer(io::stderr)
        .init();

    if !cli.ignored.is_empty() {
        tracing::debug!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let raw = pyramid::argument_text(cli.index.as_deref());
    let code = pyramid::run(&raw, &mut io::stdout().lock(), &mut io::stderr().lock());
    process::exit(code);
}
