use anyhow::Result;
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::PlayMode;
use tracing::info;

#[derive(Parser)]
#[command(name = "snake-tui")]
#[command(version, about = "Classic snake on a bounded playfield, in the terminal")]
struct Cli {
    /// Playfield width in pixels
    #[arg(long, default_value = "400")]
    width: usize,

    /// Playfield height in pixels
    #[arg(long, default_value = "300")]
    height: usize,

    /// Target frames per second
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u64).range(1..=120))]
    fps: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = GameConfig {
        width: cli.width,
        height: cli.height,
        frame_rate: cli.fps,
        ..GameConfig::default()
    };
    info!(
        width = config.width,
        height = config.height,
        fps = config.frame_rate,
        "starting snake"
    );

    let mut play_mode = PlayMode::new(config);
    play_mode.run().await?;

    Ok(())
}

fn init_tracing() {
    // Logs go to stdout; the game itself draws on stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
