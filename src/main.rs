use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use mc_assistant::application::errors::AppError;
use mc_assistant::infrastructure::adapters::ConsoleAdapter;
use mc_assistant::infrastructure::config::{Config, LogFormat};
use mc_assistant::infrastructure::http::{self, AppState};
use mc_assistant::infrastructure::knowledge;
use mc_assistant::{ChatService, ResponseDispatcher};

#[derive(Parser)]
#[command(name = "mc-assistant")]
#[command(about = "A Minecraft Q&A chat assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Listen port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the chat page and API
    Serve,
    /// Chat in the terminal
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli.config, cli.port) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    init_logging(config.logging.format);

    if let Err(e) = run(cli.command, &cli.config, config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(path: &Path, port_override: Option<u16>) -> Result<Config, AppError> {
    let mut config = Config::resolve(path)?;
    if let Some(port) = port_override {
        config.server.port = port;
        config.validate()?;
    }
    Ok(config)
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}

fn run(command: Commands, config_path: &Path, config: Config) -> Result<(), AppError> {
    match command {
        Commands::Serve => {
            let addr = config.socket_addr()?;
            let state = AppState::from_config(&config);
            tracing::info!(
                history_window = config.chat.history_window,
                rules = knowledge::minecraft_rules().len(),
                "Starting mc-assistant v{}",
                env!("CARGO_PKG_VERSION")
            );

            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(http::serve(addr, state))
        }
        Commands::Chat => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                let mut console = ConsoleAdapter::new(chat_service(&config));
                console.run().await
            })?;
            Ok(())
        }
        Commands::Ask { question } => {
            let question = question.join(" ");
            let mut console = ConsoleAdapter::new(chat_service(&config));
            println!("{}", console.ask(&question));
            Ok(())
        }
        Commands::Version => {
            println!("mc-assistant v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(config_path),
    }
}

fn chat_service(config: &Config) -> ChatService {
    ChatService::new(Arc::new(ResponseDispatcher::minecraft()))
        .with_history_window(config.chat.history_window)
}

fn init_config(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        tracing::warn!("{} already exists, leaving it untouched", path.display());
        return Ok(());
    }
    Config::default().save(path)?;
    println!("Created {}", path.display());
    Ok(())
}
