use chef::Command;
use chef::core::config;
use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chef", about = "Your new inventory cli tool")]
struct Args {
    /// Session to launch: add, list, remove, write (anything else opens the editor)
    command: Option<String>,

    /// Path to the inventory database
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let (file_config, config_source) = match config::load_config() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("chef: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = config::resolve(&file_config, args.db.as_deref());

    // Log to a file: the terminal belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = config.log_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    // Config loading ran before the logger existed
    config_source.log();
    log::debug!("Config: {:?}", config);

    let command = Command::from_token(args.command.as_deref());
    log::info!("Starting application ({:?} session)...", command);

    match chef::tui::run(&config, command) {
        Ok(()) => {
            log::info!("Program terminated.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("chef: {e}");
            ExitCode::FAILURE
        }
    }
}
