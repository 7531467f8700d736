use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use env_logger::Env;

mod capsy;
mod commands;
mod templates;
mod utils;

use capsy::error::CapsyError;
use capsy::worklog::EntryKind;
use commands::open::OpenTarget;

const LONG_ABOUT: &str = "\
Capsy keeps a per-project work journal for a single developer.

`capsy init` sets up a hidden .capsy/ directory in the project. After that,
`capsy cp` and `capsy day` append timestamped checkpoint and end-of-day notes
to one Markdown file per day under .capsy/worklog/. The files are plain text
so an external summariser can pick them up together with the prompt templates
in .capsy/prompts/.";

const AFTER_HELP: &str = "\
EXAMPLES:
    Set up Capsy in the current project:
        $ capsy init

    Log a mid-session checkpoint:
        $ capsy cp wired up the login form

    Close the day:
        $ capsy day auth flow done, tests still flaky

    Show the next three open tasks:
        $ capsy next

    Open today's worklog in $EDITOR (or print its path):
        $ capsy open today

OPTIONS:
    -C and -v go before the subcommand. Everything after `cp`/`day` is
    part of the note, including words that start with a hyphen.

EXIT CODES:
    0  success
    1  unexpected failure
    2  usage error (bad or missing arguments)
    3  project not initialized
    4  filesystem error";

#[derive(Parser)]
#[command(name = "capsy")]
#[command(version)]
#[command(about = "Per-project work journal: checkpoints and end-of-day notes")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Run as if capsy was started in PATH instead of the current directory
    #[arg(short = 'C', long = "dir", value_name = "PATH")]
    dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the .capsy/ directory in the project
    #[command(
        long_about = "\
Create the .capsy/ directory in the project.

Creates, when missing:
  • .capsy/tasks.md                    - Task list (Backlog / Next)
  • .capsy/worklog/                    - One Markdown log per day
  • .capsy/prompts/checkpoint.user.txt - Checkpoint summary prompt
  • .capsy/prompts/endday.user.txt     - End-of-day summary prompt
  • .capsy/schemas/, .capsy/runs/      - Reserved

Safe to run again: existing files are never overwritten."
    )]
    Init,

    /// Append a CHECKPOINT note to today's worklog
    #[command(after_help = "\
EXAMPLES:
    $ capsy cp setup done

OUTPUT:
    Logged CHECKPOINT to /path/to/project/.capsy/worklog/2025-06-12.md")]
    Cp {
        /// Note text; all words are joined with spaces
        #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Append an ENDDAY note to today's worklog
    Day {
        /// Note text; all words are joined with spaces
        #[arg(value_name = "MESSAGE", trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Show the first three open items under "## Next" in tasks.md
    Next,

    /// Open tasks.md or today's worklog in $VISUAL/$EDITOR
    #[command(long_about = "\
Open tasks.md or today's worklog in $VISUAL/$EDITOR.

When neither variable is set the absolute path is printed instead.")]
    Open {
        #[arg(value_enum)]
        target: OpenTarget,
    },
}

impl Commands {
    fn usage(&self) -> &'static str {
        match self {
            Commands::Init => "capsy init",
            Commands::Cp { .. } => "capsy cp <message...>",
            Commands::Day { .. } => "capsy day <message...>",
            Commands::Next => "capsy next",
            Commands::Open { .. } => "capsy open <tasks|today>",
        }
    }
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .try_init();
}

fn run(cli: &Cli) -> Result<(), CapsyError> {
    let root = utils::fs::resolve_root(cli.dir.as_deref())
        .map_err(CapsyError::io(cli.dir.as_deref().unwrap_or(Path::new("."))))?;
    log::debug!("project root: {}", root.display());

    match &cli.command {
        Commands::Init => commands::init::run(&root),
        Commands::Cp { message } => commands::entry::run(&root, EntryKind::Checkpoint, message),
        Commands::Day { message } => commands::entry::run(&root, EntryKind::Endday, message),
        Commands::Next => commands::next::run(&root),
        Commands::Open { target } => commands::open::run(&root, *target),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        match &e {
            CapsyError::InvalidArgument(_) => {
                eprintln!("Usage: {}", cli.command.usage());
            }
            CapsyError::NotInitialized { .. } => {
                eprintln!("Run `capsy init` first.");
            }
            CapsyError::NotFound { .. } => {
                if let Commands::Open { target: OpenTarget::Today } = cli.command {
                    eprintln!("Nothing logged today yet. Try `capsy cp <message...>`.");
                }
            }
            _ => {}
        }
        std::process::exit(e.exit_code());
    }
}
