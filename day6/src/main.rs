use std::time::Instant;

use anyhow::Result;
use day6::solve;
use tracing::{debug, info};
use util::{init_logging, read_input};

fn main() -> Result<()> {
    init_logging();

    let then = Instant::now();

    let signal = read_input()?;
    debug!(chars = signal.chars().count(), "read signal");

    let (packet, message) = solve(&signal);

    println!("{packet}");
    println!("{message}");

    info!(elapsed = ?then.elapsed(), "solved");

    Ok(())
}
