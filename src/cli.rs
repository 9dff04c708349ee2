//! Command-line interface for the solitaire window.

use clap::Parser;

use solitaire::ui::DEFAULT_CELL_SIZE;

/// Peg solitaire on the cross-shaped board
#[derive(Parser, Debug)]
#[command(name = "solitaire")]
#[command(about = "Peg solitaire with a clickable board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the starting hole; later games use the following seeds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cell size in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,

    /// Log filter, overrides RUST_LOG (e.g. "solitaire=debug")
    #[arg(long)]
    pub log: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["solitaire"]).unwrap();
        assert_eq!(cli.seed, None);
        assert_eq!(cli.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(cli.log, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "solitaire",
            "--seed",
            "17",
            "--cell-size",
            "64",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.seed, Some(17));
        assert_eq!(cli.cell_size, 64.0);
        assert_eq!(cli.log.as_deref(), Some("debug"));
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["solitaire", "--seed", "-3"]).is_err());
    }
}
