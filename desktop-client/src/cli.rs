use std::path::PathBuf;

use clap::Parser;
use common::config::Validate;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "snake")]
#[command(about = "Classic Snake on a square grid")]
#[command(version)]
pub struct Cli {
    /// Config file to use instead of snake_config.yaml next to the executable
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Cells per side of the playfield
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Milliseconds between snake moves
    #[arg(long)]
    pub tick_ms: Option<u32>,

    /// Seed for food placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log every food placement
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Command line values win over the file. The merged result is validated again.
    pub fn apply(&self, mut config: Config) -> Result<Config, String> {
        if let Some(grid_size) = self.grid_size {
            config.game.grid_size = grid_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if self.verbose {
            config.verbose_logging = true;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::try_parse_from(["snake"]).unwrap();
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "snake",
            "--grid-size",
            "30",
            "--tick-ms",
            "90",
            "--seed",
            "5",
            "-v",
        ])
        .unwrap();
        let config = cli.apply(Config::default()).unwrap();
        assert_eq!(config.game.grid_size, 30);
        assert_eq!(config.game.tick_interval_ms, 90);
        assert_eq!(config.game.seed, Some(5));
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_out_of_range_flag_is_rejected() {
        let cli = Cli::try_parse_from(["snake", "--grid-size", "2"]).unwrap();
        assert!(cli.apply(Config::default()).is_err());
    }
}
