use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use votemarket_db::config::Config;
use votemarket_db::error::{Error, Result};
use votemarket_db::logger::{LogLevel, Logger};
use votemarket_db::storage::{render, JsonFileStorage};
use votemarket_db::{run_update, UpdateRequest, SUCCESS_SENTINEL};

pub const USAGE: &str = "Usage: votemarket-db <protocol> <platform> <chainIds> <seed>";

#[derive(Parser, Debug)]
#[command(name = "votemarket-db", version)]
#[command(about = "Prepend vote market campaign seeds to the votemarkets.json database")]
pub struct Cli {
    /// Protocol name, stored lowercased (e.g. curve)
    #[arg(allow_hyphen_values = true)]
    pub protocol: String,

    /// Platform contract address: 0x followed by 40 hex digits
    #[arg(allow_hyphen_values = true)]
    pub platform: String,

    /// JSON array of chain ids, e.g. "[10,42161,8453]"
    #[arg(value_name = "CHAIN_IDS", allow_hyphen_values = true)]
    pub chain_ids: String,

    /// bytes8 seed: 0x followed by 16 hex digits
    #[arg(allow_hyphen_values = true)]
    pub seed: String,

    /// Database file (default: votemarkets.json beside the executable)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Log level: error, warn, info or debug
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the updated database instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Parse the command line. `--help` and `--version` print and exit here;
/// any other parse failure is reported as an argument count error.
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Error::ArgumentCount,
    })
}

pub fn build_config(cli: &Cli) -> Config {
    let mut config = Config::from_env();
    if let Some(path) = &cli.db {
        config.set_db_path(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.set_log_level(level.clone());
    }
    config.set_dry_run(cli.dry_run);
    config
}

pub fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli);
    match LogLevel::from_name(config.get_log_level()) {
        Some(level) => Logger::init(level),
        None => {
            Logger::init(LogLevel::Warn);
            Logger::warn(&format!(
                "Unknown log level {:?}, using warn",
                config.get_log_level()
            ));
        }
    }
    Logger::debug(&format!("Using database {}", config.get_db_path().display()));

    let mut storage = JsonFileStorage::new(&config);
    let request = UpdateRequest::new(cli.protocol, cli.platform, cli.chain_ids, cli.seed);
    let outcome = run_update(&mut storage, &request, config.is_dry_run())?;

    Logger::info(&format!(
        "Prepended {} records, database now holds {}",
        outcome.added, outcome.count
    ));

    if outcome.persisted {
        println!("{}", SUCCESS_SENTINEL);
    } else {
        println!("{}", render(&outcome.database)?);
    }
    Ok(())
}
