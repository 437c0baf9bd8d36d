use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hotseat_battleship::cli::check_board_size;
use hotseat_battleship::{
    init_logging, Coordinator, GameConfig, Phase, Session, StdinInput, TerminalPresenter,
};
use tokio::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Two-player hot-seat battleship in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Clone, Debug, Default)]
struct ConfigArgs {
    #[arg(long, help = "JSON file with game settings")]
    config: Option<PathBuf>,
    #[arg(long)]
    board_size: Option<usize>,
    #[arg(long)]
    min_ships: Option<usize>,
    #[arg(long)]
    max_ships: Option<usize>,
    #[arg(long, help = "Countdown per turn in seconds")]
    turn_seconds: Option<u32>,
    #[arg(long, help = "Pause before the hand-over prompt, in milliseconds")]
    delay_ms: Option<u64>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(size) = self.board_size {
            config.board_size = size;
        }
        if let Some(min) = self.min_ships {
            config.min_ships = min;
        }
        if let Some(max) = self.max_ships {
            config.max_ships = max;
        }
        if let Some(seconds) = self.turn_seconds {
            config.turn_seconds = seconds;
        }
        if let Some(delay) = self.delay_ms {
            config.resolving_delay_ms = delay;
            config.game_over_delay_ms = delay;
        }
        config.validate()?;
        check_board_size(config.board_size).map_err(anyhow::Error::msg)?;
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Play a hot-seat game on this terminal.
    Play {
        #[command(flatten)]
        settings: ConfigArgs,
    },
    /// Print the effective settings as JSON.
    Rules {
        #[command(flatten)]
        settings: ConfigArgs,
    },
}

fn print_help_text() {
    println!("Commands: A5 place/fire, r rotate, x A5 delete ship, p pause, y/n answer, q quit");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { settings } => {
            let config = settings.load()?;
            let board_size = config.board_size;
            print_help_text();
            let coordinator = Coordinator::new(config, TerminalPresenter::stdout())?;
            let mut session = Session::new(coordinator, Duration::from_millis(100));
            let mut input = StdinInput::new(board_size);
            let snapshot = session.run(&mut input).await?;
            if snapshot.phase != Phase::GameOver {
                println!("Match left in {:?}.", snapshot.phase);
            }
            log::info!("final state: {}", serde_json::to_string(&snapshot)?);
        }
        Commands::Rules { settings } => {
            let config = settings.load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
