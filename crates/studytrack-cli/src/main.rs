use clap::{Parser, Subcommand};

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "studytrack", version, about = "Studytrack CLI")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Home dashboard
    Home(commands::home::HomeArgs),
    /// Study screen: items, status changes and the focus timer
    Study {
        #[command(subcommand)]
        action: commands::study::StudyAction,
    },
    /// Weekly progress report
    Progress,
    /// Profile and settings
    Profile(commands::profile::ProfileArgs),
    /// Tab navigation
    Nav(commands::nav::NavArgs),
    /// Configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Home(args) => commands::home::run(args),
        Commands::Study { action } => commands::study::run(action),
        Commands::Progress => commands::progress::run(),
        Commands::Profile(args) => commands::profile::run(args),
        Commands::Nav(args) => commands::nav::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
