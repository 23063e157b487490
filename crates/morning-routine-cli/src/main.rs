use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::checklist::Context;

#[derive(Parser)]
#[command(name = "morning-routine", version, about = "Morning routine checklist")]
struct Cli {
    /// Checklist file to use instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Without a subcommand, writes the HTML view and opens it
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the checklist in the terminal
    List {
        /// Print the checklist document as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mark an item as complete
    Complete {
        /// Item ID
        id: u32,
    },
    /// Record today's wake time (HH:MM)
    Waketime {
        /// Wake time, e.g. 06:15
        wake_time: String,
    },
    /// Write the HTML view without opening it
    Generate,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    // Argument mistakes print usage and end the run quietly.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if matches!(e.kind(), ErrorKind::ValueValidation | ErrorKind::InvalidValue) {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            return;
        }
    };
    init_logging();

    let data_file = cli.data_file;
    let result = match cli.command {
        None => Context::load(data_file).and_then(|ctx| ctx.open_view()),
        Some(Commands::List { json }) => Context::load(data_file).and_then(|ctx| ctx.list(json)),
        Some(Commands::Complete { id }) => Context::load(data_file).and_then(|ctx| ctx.complete(id)),
        Some(Commands::Waketime { wake_time }) => {
            Context::load(data_file).and_then(|ctx| ctx.wake_time(&wake_time))
        }
        Some(Commands::Generate) => Context::load(data_file).and_then(|ctx| ctx.generate()),
        Some(Commands::Config { action }) => commands::config::run(action),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "morning-routine", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
