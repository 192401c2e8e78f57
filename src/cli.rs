use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokedex-collect")]
#[command(version, about = "Collect PokeAPI CSV tables into local JSON files")]
pub struct Cli {
    /// Skip data collection entirely
    #[arg(short = 'd', long = "nodata")]
    pub nodata: bool,

    /// Re-fetch and re-derive every resource even if cached
    #[arg(short, long)]
    pub force: bool,

    /// Directory for raw caches and derived JSON files
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags() {
        let cli = Cli::parse_from(["pokedex-collect"]);
        assert!(!cli.nodata);
        assert!(!cli.force);
        assert_eq!(cli.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from(["pokedex-collect", "-d", "-f"]);
        assert!(cli.nodata);
        assert!(cli.force);
    }
}
