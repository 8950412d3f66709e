use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead};

use specify_cli::commands;
use specify_cli::delegate::Launcher;
use specify_cli::ui;

#[derive(Parser)]
#[command(
    name = "specify",
    about = "AI model switching and task tracking CLI for spec-driven development",
    long_about = None,
    disable_version_flag = true
)]
struct Cli {
    /// Show version
    #[arg(short = 'v', long = "version", global = true)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Switch AI models without losing progress
    SwitchModel {
        /// Target AI model to switch to
        target: String,
    },

    /// Show available AI models and compatibility
    ListModels,

    /// Auto-detect existing spec-kit projects
    DetectProject,

    /// Clean project reset with backup
    ResetProject {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Manage task tracking (enable|disable|status)
    TrackTasks {
        /// Action to perform
        action: String,
    },

    /// Initialize a new spec-kit project
    Init {
        /// Project name
        name: Option<String>,

        /// Initialize in the current directory instead of creating one
        #[arg(long)]
        here: bool,

        /// AI agent to set up (claude, gemini, copilot)
        #[arg(long)]
        ai: Option<String>,

        /// Script flavor for generated helpers (sh, ps)
        #[arg(long)]
        script: Option<String>,

        /// Skip checks for agent-specific tooling
        #[arg(long)]
        ignore_agent_tools: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("specify-cli v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(command) = cli.command else {
        ui::welcome();
        return Ok(());
    };

    let exit_code = match command {
        Commands::SwitchModel { target } => {
            commands::switch_model::execute(&Launcher::detect()?, &target)?
        }
        Commands::ListModels => commands::list_models::execute(&Launcher::detect()?)?,
        Commands::DetectProject => commands::detect_project::execute(&Launcher::detect()?)?,
        Commands::ResetProject { yes } => {
            // Piped stdin never answers the prompt; it reads as a decline.
            let mut stdin = io::stdin().lock();
            let mut non_tty = io::empty();
            let input: &mut dyn BufRead = if atty::is(atty::Stream::Stdin) {
                &mut stdin
            } else {
                &mut non_tty
            };
            commands::reset_project::execute(&Launcher::detect()?, yes, input)?
        }
        Commands::TrackTasks { action } => {
            commands::track_tasks::execute(&Launcher::detect()?, &action)?
        }
        Commands::Init {
            name,
            here,
            ai,
            script,
            ignore_agent_tools,
        } => commands::init::execute(
            &Launcher::detect()?,
            name.as_deref(),
            here,
            ai.as_deref(),
            script.as_deref(),
            ignore_agent_tools,
        )?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
