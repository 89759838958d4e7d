//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::ConsoleInteraction;
use crate::infrastructure::{InfraError, InfraResult};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None | Some(Commands::Play) => cmd_play(cli),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config_file.as_deref())?;
    if cli.show_tree {
        settings.show_tree = true;
    }
    debug!("settings: {:?}", settings);
    Ok(settings)
}

#[instrument(skip(cli))]
fn cmd_play(cli: &Cli) -> CliResult<()> {
    let container = ServiceContainer::new(load_settings(cli)?);
    let mut session = container.session(ConsoleInteraction::stdio())?;
    let summary = session.run()?;
    info!(
        "session over: {} rounds, {} learned",
        summary.rounds, summary.learned
    );
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = load_settings(cli)?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => {
                output::header("Global config");
                let state = if path.exists() { "" } else { " (not created)" };
                output::info(&format!("{}{}", path.display(), state));
            }
            None => {
                return Err(CliError::Usage(
                    "no home directory, cannot locate global config".to_string(),
                ))
            }
        },
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no home directory, cannot locate global config".to_string())
            })?;
            if path.exists() && !force {
                return Err(CliError::Usage(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            write_template(&path)?;
            output::success(&format!("created {}", path.display()));
        }
    }
    Ok(())
}

fn write_template(path: &Path) -> InfraResult<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| InfraError::io(format!("create {}", dir.display()), e))?;
    }
    std::fs::write(path, Settings::template())
        .map_err(|e| InfraError::io(format!("write {}", path.display()), e))
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    debug!("generating {:?} completions for {}", shell, name);
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
