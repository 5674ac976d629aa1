use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use lang_roulette::catalog::SourceCatalog;
use lang_roulette::config::RouletteConfig;
use lang_roulette::pool::LanguagePool;
use lang_roulette::tui::app::RouletteApp;
use lang_roulette::tui::runner::run_tui;

#[derive(Parser)]
#[command(
    name = "roulette",
    about = "Programming language roulette. Spin the wheel, learn a language."
)]
struct Cli {
    /// Pool backing file (overrides config)
    #[arg(long)]
    dict: Option<PathBuf>,

    /// Source catalog CSV (overrides config)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Config file
    #[arg(long, default_value = "roulette.yaml")]
    config: PathBuf,

    /// Seed the RNG for reproducible draws
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Draw one language and print it
    Spin,
    /// Rebuild the pool from the source catalog
    Reset,
    /// Print how many languages remain
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lang_roulette=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let mut config = RouletteConfig::load(&cli.config);
    if let Some(dict) = cli.dict {
        config.dict_path = dict;
    }
    if let Some(source) = cli.source {
        config.source_path = source;
    }

    let mut pool = LanguagePool::new(&config.dict_path);
    let catalog = SourceCatalog::new(&config.source_path);
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Some(Command::Spin) => {
            pool.load()?;
            let pick = pool.draw(&mut rng)?;
            println!("{pick}");
        }
        Some(Command::Reset) => {
            let n = pool.reset(&catalog)?;
            println!("Pool reset: {n} languages");
        }
        Some(Command::Status) => {
            pool.load()?;
            println!("{} languages remaining", pool.len());
        }
        None => {
            info!("starting roulette with pool {}", config.dict_path.display());
            run_tui(RouletteApp::new(pool, catalog, rng))?;
        }
    }

    Ok(())
}
