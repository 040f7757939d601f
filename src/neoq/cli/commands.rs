//! # CLI Layer
//!
//! This module is **one possible UI client** for neoq. It is the only place
//! that:
//! - Parses command-line arguments
//! - Initializes logging
//! - Writes to stdout/stderr
//!
//! Everything else is delegated to [`NeoApi`], whose `CmdResult`s are rendered
//! by `render.rs`.

use super::render::{print_approaches, print_messages, print_neo, print_neo_approaches};
use super::setup::{Cli, Commands, InspectArgs, QueryArgs};
use clap::Parser;
use directories::ProjectDirs;
use neoq::api::NeoApi;
use neoq::config::NeoConfig;
use neoq::error::Result;
use std::path::PathBuf;

/// Directory holding `config.json`; defaults to the platform config dir.
const CONFIG_DIR_ENV: &str = "NEOQ_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config()?.with_data_files(cli.neofile, cli.cadfile);
    let api = NeoApi::from_config(&config)?;

    match cli.command {
        Commands::Inspect(args) => handle_inspect(&api, args),
        Commands::Query(args) => handle_query(&api, &config, args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_config() -> Result<NeoConfig> {
    let config_dir = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => match ProjectDirs::from("com", "neoq", "neoq") {
            Some(dirs) => dirs.config_dir().to_path_buf(),
            None => return Ok(NeoConfig::default()),
        },
    };
    NeoConfig::load(config_dir)
}

fn handle_inspect(api: &NeoApi, args: InspectArgs) -> Result<()> {
    let result = api.inspect(
        args.target.pdes.as_deref(),
        args.target.name.as_deref(),
        args.approaches,
    )?;

    for neo in &result.neos {
        print_neo(neo);
        if args.approaches {
            print_neo_approaches(&result.approaches);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_query(api: &NeoApi, config: &NeoConfig, args: QueryArgs) -> Result<()> {
    let criteria = args.criteria();

    match &args.outfile {
        Some(path) => {
            let result = api.query(&criteria, args.limit)?;
            print_messages(&result.messages);
            let written = api.export(&result.approaches, path)?;
            print_messages(&written.messages);
        }
        None => {
            let max_results = args.limit.or(Some(config.display_limit));
            let result = api.query(&criteria, max_results)?;
            print_approaches(&result.approaches);
            print_messages(&result.messages);
        }
    }
    Ok(())
}
