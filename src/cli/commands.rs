//! Command dispatch

use std::io;

use clap::CommandFactory;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::Outcome;
use crate::cli::args::{Cli, Commands, ConfigCommands, StateArgs};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::{render_board, render_forest};
use crate::cli::script::{parse_board_intent, parse_tree_intent};
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { exec, state }) => run_tree(load_settings(cli)?, exec, *state),
        Some(Commands::Board { exec, state }) => run_board(load_settings(cli)?, exec, *state),
        Some(Commands::Config { command }) => run_config(&load_settings(cli)?, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, run with --help for usage".to_string(),
        )),
    }
}

fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn report(label: &str, outcome: Outcome) {
    match outcome {
        Outcome::Applied(()) => output::success(label),
        Outcome::Ignored(reason) => output::failure(&format!("{}: {}", label, reason)),
    }
}

fn to_json(value: &impl Serialize) -> CliResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| {
        InfraError::Serialize {
            message: e.to_string(),
        }
        .into()
    })
}

#[instrument(skip(settings))]
fn run_tree(settings: Settings, exec: &[String], state: StateArgs) -> CliResult<()> {
    // Reject a malformed script before touching any state
    let intents = exec
        .iter()
        .map(|line| parse_tree_intent(line))
        .collect::<CliResult<Vec<_>>>()?;

    let seed = settings.seed && !state.empty;
    let container = ServiceContainer::new(settings);
    let mut service = container.tree_service(seed)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(|e| InfraError::io("start async runtime", e))?;

    runtime.block_on(async {
        for intent in intents {
            let label = intent.to_string();
            let outcome = service.dispatch(intent).await?;
            if !state.json {
                report(&label, outcome);
            }
        }
        Ok::<_, CliError>(())
    })?;

    let snapshot = service.forest().snapshot();
    if state.json {
        output::info(&to_json(&snapshot)?);
    } else {
        output::info(render_forest(&snapshot).trim_end());
    }
    Ok(())
}

#[instrument(skip(settings))]
fn run_board(settings: Settings, exec: &[String], state: StateArgs) -> CliResult<()> {
    let intents = exec
        .iter()
        .map(|line| parse_board_intent(line))
        .collect::<CliResult<Vec<_>>>()?;

    let seed = settings.seed && !state.empty;
    let container = ServiceContainer::new(settings);
    let mut service = container.board_service(seed)?;

    for intent in intents {
        let label = intent.to_string();
        let outcome = service.apply(intent);
        if !state.json {
            report(&label, outcome);
        }
    }

    if state.json {
        output::info(&to_json(service.board())?);
    } else {
        for (heading, cards) in render_board(service.board()) {
            output::header(&heading);
            for card in cards {
                output::detail(&card);
            }
        }
    }
    Ok(())
}

fn run_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}
