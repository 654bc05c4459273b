pub mod cli;
pub mod config;
pub mod convert;
pub mod data;
pub mod error;
pub mod frequency;
pub mod io_utils;
pub mod metadata;
pub mod naming;
pub mod profile;
pub mod sheet;
pub mod store;
pub mod table;

use std::{env, sync::OnceLock};

use anyhow::{Result, bail};
use clap::{Parser, error::ErrorKind};
use log::LevelFilter;

use crate::{cli::Cli, config::ConvertConfig};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("sheetdb", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{}", cli::usage());
            bail!("expected exactly one argument: the directory to convert");
        }
    };
    convert::execute(&cli.root, &ConvertConfig::default())?;
    Ok(())
}
