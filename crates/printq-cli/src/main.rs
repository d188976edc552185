mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::order::OrderSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "printq",
    about = "3D print queue — submit part requests and manage their status",
    version,
    propagate_version = true
)]
struct Cli {
    /// Queue root (default: auto-detect from .printq/)
    #[arg(long, global = true, env = "PRINTQ_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the queue in the current directory
    Init,

    /// Authenticate and start a session
    Login { email: String, password: String },

    /// End the current session
    Logout,

    /// Show the current session identity
    Whoami,

    /// Manage print orders
    Order {
        #[command(subcommand)]
        subcommand: OrderSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root, cli.json),
        Commands::Login { email, password } => cmd::auth::login(&root, &email, &password, cli.json),
        Commands::Logout => cmd::auth::logout(&root, cli.json),
        Commands::Whoami => cmd::auth::whoami(&root, cli.json),
        Commands::Order { subcommand } => cmd::order::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
