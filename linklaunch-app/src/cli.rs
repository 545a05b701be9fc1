//! Command-line argument parsing.

use anyhow::{anyhow, bail, Result};
use linklaunch::ApplicationType;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: linklaunch [--config FILE] [--json] <email|telegram|github> <identifier>
       linklaunch [--config FILE] probe";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Launch(ApplicationType, String),
    Probe,
    Help,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub json: bool,
    pub command: Command,
}

pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut config = None;
    let mut json = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                config = Some(PathBuf::from(path));
            }
            "--json" => json = true,
            "--help" | "-h" => {
                return Ok(CliArgs {
                    config,
                    json,
                    command: Command::Help,
                })
            }
            flag if flag.starts_with("--") => bail!("Unknown flag: {}", flag),
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Help,
        ["probe"] => Command::Probe,
        [kind, identifier] => Command::Launch(kind.parse()?, identifier.to_string()),
        [kind] => bail!("Missing identifier for {}", kind),
        _ => bail!("Too many arguments"),
    };

    Ok(CliArgs {
        config,
        json,
        command,
    })
}
