use log::warn;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VOTES_PATH: &str = "votos.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub votes_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value '{}', using default {}", value, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let votes_path = env::var("VOTES_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_VOTES_PATH));

        Self { port, votes_path }
    }
}
