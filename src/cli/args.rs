//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Drive the lazy tree and kanban board engines from the terminal
#[derive(Parser, Debug)]
#[command(name = "treeboard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply tree intents and print the resulting tree
    ///
    /// Intents: `add <parent|-> <name>`, `rename <id> <name>`, `delete <id>`,
    /// `move <id> <target|->`, `toggle <id>`, `expand <id>`
    Tree {
        /// Intent to apply, in order (repeatable)
        #[arg(short = 'e', long = "exec", value_name = "INTENT")]
        exec: Vec<String>,

        #[command(flatten)]
        state: StateArgs,
    },

    /// Apply board intents and print the resulting board
    ///
    /// Intents: `add <column> <title>`, `rename <card> <title>`, `delete <card>`,
    /// `move <card> <column> [index]`
    Board {
        /// Intent to apply, in order (repeatable)
        #[arg(short = 'e', long = "exec", value_name = "INTENT")]
        exec: Vec<String>,

        #[command(flatten)]
        state: StateArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(clap::Args, Debug, Clone, Copy)]
pub struct StateArgs {
    /// Start from empty state instead of the sample data
    #[arg(long)]
    pub empty: bool,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,
    /// Show the global config file location
    Path,
    /// Print a commented config template
    Template,
}
