//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use kanban_dnd::output::OutputMode;

/// kanban-dnd - Drag-and-drop and touch gestures for kanban boards
#[derive(Parser, Debug)]
#[command(
    name = "kanban-dnd",
    version,
    about = "Drag-and-drop and touch gestures for kanban boards",
    long_about = "Replay scripted drag, drop and touch sequences through the board's\n\
                  interaction handlers.\n\n\
                  A replay reports which events had their default suppressed, the\n\
                  cardStatusUpdate and cardTap notifications emitted, and the final\n\
                  visual state of the board."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a scenario file (TOML, or JSON with a .json extension)
    Replay {
        /// Scenario to replay
        file: PathBuf,

        /// Interaction config to use instead of the resolved one
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Show or create the interaction config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Config file to read instead of the resolved one
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write the default configuration to the user config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Replay { file, config }) => commands::replay(&file, config.as_deref(), output_mode),
        Some(Command::Config {
            action: ConfigAction::Show { config },
        }) => commands::config_show(config.as_deref(), output_mode),
        Some(Command::Config {
            action: ConfigAction::Init { force },
        }) => commands::config_init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": kanban_dnd::VERSION
                    })
                );
            } else {
                println!("kanban-dnd v{}", kanban_dnd::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": kanban_dnd::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("kanban-dnd v{}", kanban_dnd::VERSION);
                println!("\nRun 'kanban-dnd --help' for usage");
                println!("Run 'kanban-dnd replay <scenario.toml>' to replay a scenario");
            }
            Ok(())
        },
    }
}
