use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use incr::Overflow;
use incr_cli::{Config, Result, increment_tokens, split_ascii_whitespace};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "incr",
    version,
    about = "Increment integers by one",
    long_about = "Prints each VALUE plus one, one per line. Reads whitespace-separated integers from stdin when no VALUE is given."
)]
struct Cli {
    /// Integers to increment (default: read from stdin)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    values: Vec<String>,

    /// Increment each value this many times
    #[arg(short = 'n', long, value_name = "N")]
    times: Option<u32>,

    /// Behavior when a value is already i32::MAX [checked, wrapping, saturating]
    #[arg(long, value_name = "POLICY")]
    overflow: Option<Overflow>,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print configuration and exit
    #[arg(long, value_name = "OPTION")]
    print_config: Option<PrintConfig>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum PrintConfig {
    Default,
    Current,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_directive = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("incr: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Some(PrintConfig::Default) = cli.print_config {
        print!("{}", Config::default_toml());
        return Ok(());
    }

    let config = load_config(cli)?;

    if let Some(PrintConfig::Current) = cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.values.is_empty() {
        tracing::debug!("reading values from stdin");
        let mut input = Vec::new();
        io::stdin().read_to_end(&mut input)?;
        increment_tokens(split_ascii_whitespace(&input), &config, &mut out)?;
    } else {
        increment_tokens(&cli.values, &config, &mut out)?;
    }

    Ok(())
}

/// The configuration file (explicit or discovered) with command-line flags
/// applied on top.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading configuration");
            Config::from_file(path)?
        }
        None => Config::load()?,
    };

    if let Some(times) = cli.times {
        config.times = times;
    }
    if let Some(overflow) = cli.overflow {
        config.overflow = overflow;
    }

    tracing::debug!(?config, "effective configuration");
    Ok(config)
}
