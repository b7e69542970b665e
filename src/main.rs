use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;

use listflags::config::Config;
use listflags::{logging, FlagError, FlagSet};

/// Parse `-to` (string list) and `-ids` (integer list) and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "listflags", version)]
struct Cli {
    /// Path to a TOML config file (default: user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing filter; overrides RUST_LOG and the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Flag arguments, e.g. `-- -to us-east-1,eu-west-2 -ids 123,456`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Report {
    to: Vec<String>,
    ids: Vec<i64>,
    args: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if err.downcast_ref::<FlagError>().is_some() {
                ExitCode::from(2)
            } else {
                ExitCode::from(1)
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    logging::init_tracing(cli.log_level.as_deref(), &config.log);

    let mut to = Vec::new();
    let mut ids = Vec::new();
    let mut flags = FlagSet::with_config("listflags", config.parse.clone());
    flags.string_list_var(&mut to, &[], "to", "Regions to be used")?;
    flags.int_list_var(&mut ids, "ids", "IDs to be used")?;
    flags.parse(cli.args)?;
    let args = flags.args().to_vec();
    drop(flags);

    let report = Report { to, ids, args };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
