use std::env;
use std::fs;
use std::process;

use dotenv::dotenv;
use env_logger::Env;
use log::info;

use instafeed::{FeedConfig, FeedConfigOverrides, InstagramFeed};

fn main() {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = env::args().collect();
    let handle = match args.get(1) {
        Some(handle) => handle.as_str(),
        None => {
            eprintln!("Usage: instafeed <handle> [config.toml]");
            process::exit(2);
        }
    };

    let config = match args.get(2) {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Could not load config {}: {}", path, err);
                process::exit(1);
            }
        },
        None => FeedConfig::default(),
    };

    info!("Generating feed for {}", handle);

    let feed = match InstagramFeed::new(handle, config) {
        Ok(feed) => feed,
        Err(err) => {
            eprintln!("Could not initialize HTTP client: {}", err);
            process::exit(1);
        }
    };

    // Fetch failures are rendered per show_error, never an exit code.
    println!("{}", feed.generate_html_feed());
}

fn load_config(path: &str) -> Result<FeedConfig, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let overrides: FeedConfigOverrides = toml::from_str(&raw)?;
    Ok(FeedConfig::from_overrides(overrides))
}
