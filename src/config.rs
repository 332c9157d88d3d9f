use std::{path::PathBuf, time::Duration};

use clap::Parser;

/// Command-line configuration for the terminal game.
#[derive(Debug, Clone, Parser)]
#[command(name = "mazewalk", version)]
#[command(about = "Walk a randomly generated maze, or watch BFS/DFS solve it")]
pub struct Config {
    /// Maze width in cells
    #[arg(short = 'W', long, default_value_t = 20, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Maze height in cells
    #[arg(short = 'H', long, default_value_t = 15, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Seed for edge weights; every reset draws from the same seeded stream
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds per animation tick
    #[arg(long, value_name = "MILLIS", default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,

    /// File receiving the log output (the terminal is taken by the game)
    #[arg(long, default_value = "mazewalk.log")]
    pub log_file: PathBuf,

    /// Maximum log level: error, warn, info, debug or trace
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 20,
            height: 15,
            seed: None,
            tick_ms: 16,
            log_file: PathBuf::from("mazewalk.log"),
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_parser() {
        let parsed = Config::try_parse_from(["mazewalk"]).unwrap();
        let default = Config::default();
        assert_eq!(parsed.width, default.width);
        assert_eq!(parsed.height, default.height);
        assert_eq!(parsed.tick_ms, default.tick_ms);
        assert_eq!(parsed.log_file, default.log_file);
        assert_eq!(parsed.log_level, default.log_level);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_parse_flags() {
        let config = Config::try_parse_from([
            "mazewalk", "-W", "7", "-H", "3", "--seed", "9", "--tick-ms", "5", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!((config.width, config.height), (7, 3));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.tick_duration(), Duration::from_millis(5));
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Config::try_parse_from(["mazewalk", "--width", "0"]).is_err());
        assert!(Config::try_parse_from(["mazewalk", "--tick-ms", "0"]).is_err());
    }
}
