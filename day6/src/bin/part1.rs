use day6::{find_marker, PACKET_WINDOW};
use util::{init_logging, read_input};

use anyhow::Result;

fn main() -> Result<()> {
    init_logging();

    let n = find_marker(&read_input()?, PACKET_WINDOW);

    println!("{n}");

    Ok(())
}
