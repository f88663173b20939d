use day6::{find_marker, MESSAGE_WINDOW};
use util::{init_logging, read_input};

use anyhow::Result;

fn main() -> Result<()> {
    init_logging();

    let n = find_marker(&read_input()?, MESSAGE_WINDOW);

    println!("{n}");

    Ok(())
}
