use anyhow::Result;
use pokedex_collect::{collect_all, Cli, DataDir};
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse_args();

    if cli.nodata {
        return Ok(());
    }

    if cli.force {
        println!("Running in forced mode...");
    }

    let start = Instant::now();
    println!("Collecting resources...");

    let dir = DataDir::new(&cli.data_dir)?;
    let count = collect_all(&dir, cli.force)?;

    println!(
        "Collected {} resources into {:?} in {:.1}s",
        count,
        dir.root(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
