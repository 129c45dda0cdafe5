//! Configuration for the console front end.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "xiangqi", about = "Two-player Xiangqi (Chinese chess) in the terminal")]
pub struct Cli {
    /// Print the board without ANSI colours.
    #[arg(long)]
    pub plain: bool,

    /// After an illegal move, list where the chosen piece could go.
    #[arg(long)]
    pub hints: bool,

    /// Draw the board with Black at the bottom.
    #[arg(long)]
    pub flipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: bool,
    pub hints: bool,
    pub flipped: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: true,
            hints: false,
            flipped: false,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            color: !cli.plain,
            hints: cli.hints,
            flipped: cli.flipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::parse_from(["xiangqi", "--plain", "--hints"]);
        let config = Config::from(cli);
        assert!(!config.color);
        assert!(config.hints);
        assert!(!config.flipped);

        let defaults = Config::from(Cli::parse_from(["xiangqi"]));
        assert_eq!(defaults, Config::default());
    }
}
