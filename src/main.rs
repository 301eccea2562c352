use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use connect_four::ai::RandomAgent;
use connect_four::config::{AppConfig, PlayerKind};
use connect_four::console::{AgentSource, Console, Seat};
use connect_four::game::ConnectFour;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Who plays A (moves first)
    #[arg(long, value_enum)]
    player_a: Option<PlayerKind>,

    /// Who plays B
    #[arg(long, value_enum)]
    player_b: Option<PlayerKind>,

    /// Seed for computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the rules text
    #[arg(long)]
    no_instructions: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let config_found = cli.config.exists();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(kind) = cli.player_a {
        config.players.a = kind;
    }
    if let Some(kind) = cli.player_b {
        config.players.b = kind;
    }
    if cli.seed.is_some() {
        config.agent.seed = cli.seed;
    }
    if cli.no_instructions {
        config.game.show_instructions = false;
    }

    init_tracing(&config.logging.filter)?;
    if !config_found {
        debug!(path = %cli.config.display(), "config file not found, using defaults");
    }

    let mut seats = [
        seat(config.players.a, config.agent.seed),
        // Offset B's seed so two seeded computers do not mirror each other.
        seat(config.players.b, config.agent.seed.map(|s| s.wrapping_add(1))),
    ];

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock())
        .with_prompt(config.game.prompt.clone())
        .with_instructions(config.game.show_instructions);

    let mut game = ConnectFour::new();
    console
        .play(&mut game, &mut seats)
        .context("game did not finish")?;
    Ok(())
}

fn seat(kind: PlayerKind, seed: Option<u64>) -> Seat<'static, ConnectFour> {
    match kind {
        PlayerKind::Human => Seat::Human,
        PlayerKind::Random => {
            let agent = match seed {
                Some(seed) => RandomAgent::with_seed(seed),
                None => RandomAgent::new(),
            };
            Seat::Computer(Box::new(AgentSource::new(agent)))
        }
    }
}

/// Log to stderr so the board on stdout stays clean. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter '{default_filter}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
