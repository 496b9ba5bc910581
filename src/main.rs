use dictionaries::bench::{self, memory, Config};
use log::{error, info, warn, LevelFilter};
use simplelog::SimpleLogger;
use std::env;
use std::process;

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn log_level() -> LevelFilter {
    env::var("DICTIONARIES_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn load_config() -> bench::Result<Config> {
    match env::args().nth(1) {
        Some(path) => {
            info!("Loading config from {}.", path);
            Config::from_file(path)
        },
        None => Ok(Config::default()),
    }
}

// A failed read counts as no growth, so the sample is discarded.
fn allocated() -> usize {
    match memory::allocated() {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("{}", err);
            0
        },
    }
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), simplelog::Config::default()) {
        eprintln!("Error: could not initialize logger: {}", err);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        },
    };

    if let Err(err) = bench::run(&config, &allocated) {
        error!("{}", err);
        process::exit(1);
    }
    info!("Results written to {}.", config.output_dir.display());
}
