use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use quoteguess::config::Config;
use quoteguess::logging::init_tracing;
use quoteguess::ui::app::Role;

#[derive(Debug, Parser)]
#[command(name = "quoteguess", version, about = "Guess the hidden quote one letter at a time")]
struct Cli {
    /// Which side of the game this terminal plays
    #[arg(long, value_enum, default_value_t = Role::Solo)]
    role: Role,

    /// Relay channel shared by display and controller
    #[arg(long)]
    channel: Option<String>,

    /// Relay address (host:port) to listen on or connect to
    #[arg(long)]
    addr: Option<String>,

    /// Read quotes from a local JSON file instead of the network
    #[arg(long, value_name = "PATH")]
    quotes_file: Option<PathBuf>,

    /// Seed for reproducible quote selection
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path (default: ~/.config/quoteguess/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(self, mut config: Config) -> Config {
        if let Some(channel) = self.channel {
            config.relay.channel = channel;
        }
        if let Some(addr) = self.addr {
            config.relay.bind_addr = addr.clone();
            config.relay.connect_addr = addr;
        }
        if let Some(path) = self.quotes_file {
            config.quotes.file = Some(path);
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("Failed to load config from {}", Config::config_path().display())
        })?,
    };

    let role = cli.role;
    let config = cli.apply_overrides(config);
    config.validate().context("Invalid command line overrides")?;

    tracing::info!(role = role.label(), channel = %config.relay.channel, "Starting quoteguess");
    quoteguess::ui::run(role, config)
}
