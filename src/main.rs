use clap::Parser;
use deskpilot::automation::{AutomationProvider, DesktopProvider};
use deskpilot::commands::{self, Command, CommandError};
use deskpilot::core::config::{self, ResolvedConfig};
use deskpilot::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "deskpilot",
    version,
    about = "Drive the mouse, keyboard and screen from the terminal"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, global = true)]
    log_level: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    // The TUI owns stdout, so logs always go to a file
    if let Ok(log_file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
    {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

async fn run(args: Args) -> Result<(), CommandError> {
    let file_config = config::load_config()?;
    let config = config::resolve(&file_config, args.log_level.as_deref());
    init_logging(&config);

    let provider: Arc<dyn AutomationProvider> = Arc::new(DesktopProvider::new());
    log::info!("deskpilot starting up with provider: {}", provider.name());

    match args.command.unwrap_or(Command::Tui) {
        Command::Tui => tui::run(&config, provider).map_err(CommandError::Io),
        command => commands::run(command, &config, provider).await,
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
