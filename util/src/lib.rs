use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Puzzle input is always read from this file in the working directory.
pub const INPUT_PATH: &str = "input";

#[derive(Error, Debug)]
#[error("unable to read input from {}", path.display())]
pub struct InputError {
    path: PathBuf,

    #[source]
    source: io::Error,
}

impl InputError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reads the whole file as one string, exactly as stored.
pub fn read_input_file(path: impl AsRef<Path>) -> Result<String, InputError> {
    let path = path.as_ref();

    fs::read_to_string(path).map_err(|source| InputError {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_input() -> Result<String, InputError> {
    read_input_file(INPUT_PATH)
}

// Logs go to stderr so stdout only carries answers. Defaults to `warn` unless
// RUST_LOG says otherwise.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Keeps the first subscriber if one is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
