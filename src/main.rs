use clap::{Parser, Subcommand, ValueEnum};
use nfl_matchup::{commands, config, tui};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "nfl-matchup")]
#[command(about = "Pick an away and a home NFL team", long_about = "Pick an away and a home NFL team\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum GroupBy {
    /// Group by division
    #[value(name = "d")]
    Division,
    /// Group by conference
    #[value(name = "c")]
    Conference,
    /// Single league-wide list
    #[value(name = "l")]
    League,
}

impl GroupBy {
    fn to_teams_groupby(self) -> commands::teams::GroupBy {
        match self {
            GroupBy::Division => commands::teams::GroupBy::Division,
            GroupBy::Conference => commands::teams::GroupBy::Conference,
            GroupBy::League => commands::teams::GroupBy::League,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List all teams
    Teams {
        /// Group teams by: d=division, c=conference, l=league
        #[arg(short, long, default_value = "d")]
        by: GroupBy,
    },
    /// Print the matchup for an away and a home team
    Matchup {
        /// Away team abbreviation (e.g., BUF)
        away: String,
        /// Home team abbreviation (e.g., KC)
        home: String,
    },
    /// Display current configuration
    Config,
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command(cfg: &config::Config) {
    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("use_unicode: {}", cfg.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("unfocused_selection_fg: {:?}{}",
        cfg.theme.unfocused_selection_fg(),
        if cfg.theme.unfocused_selection_fg.is_none() { " (auto: 50% darker)" } else { "" }
    );
    println!("disabled_fg: {:?}", cfg.theme.disabled_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
fn execute_command(command: Commands, config: &config::Config) -> anyhow::Result<()> {
    match command {
        Commands::Teams { by } => commands::teams::run(by.to_teams_groupby(), config),
        Commands::Matchup { away, home } => {
            commands::matchup::run(&away.to_uppercase(), &home.to_uppercase())
        }
        Commands::Config => {
            handle_config_command(config);
            Ok(())
        }
    }
}

fn main() {
    let config = config::read();
    let cli = Cli::parse();

    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let Some(command) = cli.command else {
        if let Err(e) = tui::run(&config) {
            eprintln!("Error running TUI: {}", e);
            tracing::error!("TUI failed: {}", e);
            std::process::exit(1);
        }
        return;
    };

    if let Err(e) = execute_command(command, &config) {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
