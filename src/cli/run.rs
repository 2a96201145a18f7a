//! Command dispatch.

use std::{env, fs, path::Path};

use anyhow::{Context, Result, bail};

use super::{Arguments, Command, ExitStatus, ExtractCommand};
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::extraction::{collect_files, run_pipeline};
use crate::reporter;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(ExitStatus::Success)
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let root = match cmd.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to resolve current directory")?,
    };

    let mut config = Config::load(&root)?;
    if let Some(source_root) = cmd.source_root {
        config.source_root = source_root.display().to_string();
    }
    if let Some(output) = &cmd.output {
        config.output = Some(output.display().to_string());
    }

    let files = collect_files(&root, &config)?;
    let outcome = run_pipeline(&files, &root);
    reporter::print_summary(&outcome, cmd.verbose);

    let json = serde_json::to_string_pretty(&outcome.collection)?;
    match &config.output {
        Some(output) => {
            let output_path = root.join(output);
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
            fs::write(&output_path, json + "\n")
                .with_context(|| format!("Failed to write output: {}", output_path.display()))?;
        }
        None => println!("{json}"),
    }

    if outcome.failures.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, Config::default_json()?)?;
    Ok(())
}
