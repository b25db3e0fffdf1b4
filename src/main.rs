use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, LevelFilter};
use zeroize::Zeroizing;

use pwdhash::{CompoundSuffixes, DomainExtractor, Generator, PublicSuffixList, SuffixRules};

/// Logging level for the command line tool.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Derive a site-specific password from a master secret read on stdin.
#[derive(Parser, Debug)]
#[command(name = "pwdhash", version, about)]
struct Cli {
    /// Site address: a URL, a host or a bare domain
    address: String,

    /// Hash against the address verbatim instead of its registrable domain
    #[arg(long)]
    raw: bool,

    /// Use the full Public Suffix List instead of the legacy suffix table
    #[arg(long, conflicts_with = "suffixes")]
    psl: bool,

    /// Newline-separated list of compound suffixes replacing the legacy table
    #[arg(long, value_name = "FILE")]
    suffixes: Option<PathBuf>,

    /// Print the domain the address hashes against and exit
    #[arg(long)]
    domain_only: bool,

    /// Log level, overrides RUST_LOG when given
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn init_logger(level: Option<LogLevel>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level.into());
    }
    builder.format_timestamp(None);
    builder.try_init().context("failed to initialize logger")
}

/// Read the secret from the first line of `input`, without its line ending.
fn read_secret<I: BufRead>(mut input: I) -> Result<Zeroizing<String>> {
    let mut secret = Zeroizing::new(String::new());
    input
        .read_line(&mut secret)
        .context("failed to read the secret from stdin")?;
    let len = secret.trim_end_matches(['\r', '\n']).len();
    secret.truncate(len);
    Ok(secret)
}

fn run<R, I, O>(cli: &Cli, extractor: DomainExtractor<R>, input: I, mut output: O) -> Result<()>
where
    R: SuffixRules,
    I: BufRead,
    O: Write,
{
    let generator = Generator::new(extractor).raw(cli.raw);

    if cli.domain_only {
        writeln!(output, "{}", generator.domain_for(&cli.address))?;
        return Ok(());
    }

    let secret = read_secret(input)?;
    let password = generator
        .generate(&cli.address, &secret)
        .context("both a site address and a secret are required")?;
    writeln!(output, "{}", password)?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level)?;

    let input = io::stdin().lock();
    let output = io::stdout().lock();

    if cli.psl {
        debug!("using the public suffix list");
        run(&cli, DomainExtractor::new(PublicSuffixList), input, output)
    } else if let Some(path) = &cli.suffixes {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read suffix list {}", path.display()))?;
        let rules = CompoundSuffixes::parse(&text);
        debug!("loaded {} compound suffixes from {}", rules.len(), path.display());
        run(&cli, DomainExtractor::new(rules), input, output)
    } else {
        run(&cli, DomainExtractor::default(), input, output)
    }
}
