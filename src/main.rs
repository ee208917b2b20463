use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use hotel::cli::{handle_backup_command, handle_snapshot_command, Menu};
use hotel::config::{paths::HotelPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "hotel",
    version,
    about = "Menu-driven hotel room allocation manager",
    long_about = "hotel-cli keeps track of rooms and the guests allocated to them, \
                  writes allocation snapshots to a text file and rolls that file \
                  into a backup log on demand."
)]
struct Cli {
    /// Directory holding the settings, snapshot and backup files
    #[arg(long, global = true, env = "HOTEL_CLI_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Operator id used in the snapshot and backup file names
    #[arg(long, global = true, env = "HOTEL_OPERATOR_ID")]
    operator: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    Menu,

    /// Snapshot file commands
    #[command(subcommand)]
    Snapshot(hotel::cli::SnapshotCommands),

    /// Backup file commands
    #[command(subcommand)]
    Backup(hotel::cli::BackupCommands),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => HotelPaths::with_base_dir(dir),
        None => HotelPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(operator) = cli.operator {
        settings.operator_id = operator.trim().to_string();
        settings.validate()?;
    }

    env_logger::Builder::from_env(
        env_logger::Env::new()
            .filter_or("HOTEL_LOG", settings.log_level.as_str())
            .write_style("HOTEL_LOG_STYLE"),
    )
    .init();
    log::debug!("Using data directory {}", paths.base_dir().display());

    match cli.command {
        None | Some(Commands::Menu) => {
            paths.ensure_directories()?;
            let stdin = std::io::stdin();
            let mut menu = Menu::from_settings(stdin.lock(), std::io::stdout(), &paths, &settings);
            menu.run()?;
            log::info!("Session ended with {} room(s)", menu.registry().len());
        }
        Some(Commands::Snapshot(cmd)) => {
            handle_snapshot_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Backup(cmd)) => {
            paths.ensure_directories()?;
            handle_backup_command(&paths, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing hotel-cli at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'hotel' to open the menu.");
        }
        Some(Commands::Config) => {
            println!("hotel-cli Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!(
                "Initialized:    {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Snapshot file:  {}", paths.snapshot_file(&settings.operator_id).display());
            println!("Backup file:    {}", paths.backup_file(&settings.operator_id).display());
            println!();
            println!("Settings:");
            println!("  Operator id:      {}", settings.operator_id);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!("  Strict rates:     {}", settings.strict_rates);
            println!("  Log level:        {}", settings.log_level);
        }
    }

    Ok(())
}
