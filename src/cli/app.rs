//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use trello_sprint::core::models::IdealCurve;
use trello_sprint::output::OutputMode;

/// trello-sprint - Sprint burndown for Trello boards
#[derive(Parser, Debug)]
#[command(
    name = "trello-sprint",
    version,
    about = "Sprint burndown for Trello boards",
    long_about = "Track a sprint on a Trello board.\n\n\
                  Pin cards to the sprint, mark which columns mean done, and compare\n\
                  the expected burndown with the cards actually remaining each week."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Board URL or id (defaults to `default_board` from the config)
    #[arg(long, global = true)]
    pub board: Option<String>,

    /// Read the board from a snapshot file instead of the Trello API
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Save the board from the Trello API to a snapshot file
    Fetch {
        /// Snapshot file to write (default: <board-id>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the sprint dates
    Dates {
        #[command(subcommand)]
        action: DatesAction,
    },

    /// Manage the columns that count as done
    Done {
        #[command(subcommand)]
        action: DoneAction,
    },

    /// Manage the cards pinned to the sprint
    Cards {
        #[command(subcommand)]
        action: CardsAction,
    },

    /// Manage the labels that mark cards as in-sprint
    Labels {
        #[command(subcommand)]
        action: LabelsAction,
    },

    /// Show expected versus actual burndown by week
    Burndown {
        /// Expected series shape: refinement, linear
        #[arg(long, default_value = "refinement")]
        curve: IdealCurve,
    },

    /// List sprint cards outside done columns, grouped by list
    Remaining,

    /// Show the sprint settings and totals
    Status,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum DatesAction {
    /// Set the sprint start and end (YYYY-MM-DD or RFC 3339)
    Set {
        /// First day of the sprint
        start: String,
        /// Last day of the sprint
        end: String,
    },

    /// Show the sprint dates
    Show,

    /// Forget the sprint dates
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum DoneAction {
    /// Mark columns as done
    Add {
        /// Column names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Unmark done columns
    Remove {
        /// Column names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List done columns
    List,

    /// Restore the default done columns
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum CardsAction {
    /// Pin cards by pasting their links
    Add {
        /// Text containing card links
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Unpin cards by link or id
    Remove {
        /// Card links or ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List pinned cards
    List,

    /// Unpin every card
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum LabelsAction {
    /// Add sprint labels
    Add {
        /// Label names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Remove sprint labels
    Remove {
        /// Label names
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List sprint labels
    List {
        /// List the labels used on the board instead
        #[arg(long)]
        available: bool,
    },
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct Session {
    /// Output mode
    pub output_mode: OutputMode,
    /// Board URL or id from the command line
    pub board: Option<String>,
    /// Snapshot file from the command line
    pub snapshot: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let session = Session {
        output_mode,
        board: cli.board,
        snapshot: cli.snapshot,
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, &session),
        Some(Command::Fetch { output }) => commands::fetch(output, &session),
        Some(Command::Dates { action }) => commands::dates(action, &session),
        Some(Command::Done { action }) => commands::done(action, &session),
        Some(Command::Cards { action }) => commands::cards(action, &session),
        Some(Command::Labels { action }) => commands::labels(action, &session),
        Some(Command::Burndown { curve }) => commands::burndown(curve, &session),
        Some(Command::Remaining) => commands::remaining(&session),
        Some(Command::Status) => commands::status(&session),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("trello-sprint v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("trello-sprint v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'trello-sprint --help' for usage");
                println!("Run 'trello-sprint init' to get started");
            }
            Ok(())
        },
    }
}
