use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use negfilt::config::Config;
use negfilt::output::Reporter;
use negfilt::output::text::TextReporter;

#[derive(Parser)]
#[command(
    name = "negfilt",
    version,
    about = "Print the negative values of an integer sequence, one per line"
)]
struct Cli {
    /// Integers to filter, comma separated; `--values=` filters an empty
    /// sequence. Defaults to 3,-1,4,-2,5,-3,6,-4.
    #[arg(long, value_parser = parse_value_list, allow_hyphen_values = true)]
    values: Option<ValueList>,

    /// Directory to look for negfilt.toml in (defaults to current directory).
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug). Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// A whole `--values` argument, parsed at once so an empty list is expressible.
#[derive(Clone, Debug)]
struct ValueList(Vec<i64>);

fn parse_value_list(arg: &str) -> Result<ValueList, String> {
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|e| format!("'{s}' is not an integer: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(ValueList)
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(2);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();
}

fn run(cli: Cli) -> negfilt::error::Result<()> {
    let root = cli
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut config = Config::load(&root)?;

    // Apply CLI overrides
    if let Some(ValueList(values)) = cli.values {
        config.values = values;
    }

    let result = negfilt::run(&config);

    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    TextReporter::new().report(&result.negatives, &mut writer)?;
    writer.flush()?;
    Ok(())
}
