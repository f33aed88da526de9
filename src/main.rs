use std::io::{self, Write};

use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use carlife::config::{SimConfig, DEFAULT_BRAND, DEFAULT_DISTANCE};
use carlife::menu;

/// Denomination calculator and car life simulation
#[derive(Parser, Debug)]
#[clap(about, long_about = None)]
struct Args {
    /// Random seed of the car simulation (random if omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Brand of the simulated car
    #[clap(long, default_value = DEFAULT_BRAND)]
    brand: String,

    /// Distance to drive
    #[clap(long, default_value_t = DEFAULT_DISTANCE)]
    distance: u32,
}

fn main() {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let args = Args::parse();
    let config = SimConfig {
        brand: args.brand,
        distance: args.distance,
        seed: args.seed.unwrap_or_else(rand::random),
    };
    log::info!("simulation seed: {}", config.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    if let Err(e) = menu::run(&mut input, &mut out, &config) {
        log::error!("console error: {}", e);
    }
}
