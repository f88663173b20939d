use std::collections::HashMap;

use itertools::Itertools;
use thiserror::Error;

pub const PACKET_WINDOW: usize = 4;
pub const MESSAGE_WINDOW: usize = 14;

/// Printed in place of a marker when the signal never has a distinct window.
pub const NOT_FOUND: i64 = -1;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MarkerError {
    #[error("window size must be at least 1")]
    ZeroWindow,

    #[error("no window of {0} distinct characters in signal")]
    NotFound(usize),
}

pub fn is_marker(window: &[char]) -> bool {
    window.iter().all_unique()
}

/// Number of characters consumed when the last `n` of them are first all
/// different.
pub fn start_n(signal: &str, n: usize) -> Result<usize, MarkerError> {
    if n == 0 {
        return Err(MarkerError::ZeroWindow);
    }

    signal
        .chars()
        .collect::<Vec<_>>()
        .windows(n)
        .enumerate()
        .find_map(|(i, window)| is_marker(window).then(|| i + n))
        .ok_or(MarkerError::NotFound(n))
}

/// Same answer as [`start_n`] in a single pass. This is the scan
/// [`find_marker`] uses; `start_n` is kept as the direct reading of the
/// definition and the two are checked against each other in tests.
///
/// `window_start` is kept just past the latest repeat, so the characters from
/// there up to the current one are always distinct. The run grows by at most
/// one per step, which makes the first run of length `n` the marker.
pub fn start_n_linear(signal: &str, n: usize) -> Result<usize, MarkerError> {
    if n == 0 {
        return Err(MarkerError::ZeroWindow);
    }

    let mut last_seen = HashMap::new();
    let mut window_start = 0;

    for (i, c) in signal.chars().enumerate() {
        if let Some(prev) = last_seen.insert(c, i) {
            window_start = window_start.max(prev + 1);
        }

        if i + 1 - window_start == n {
            return Ok(i + 1);
        }
    }

    Err(MarkerError::NotFound(n))
}

pub fn find_marker(signal: &str, n: usize) -> i64 {
    start_n_linear(signal, n)
        .ok()
        .and_then(|end| i64::try_from(end).ok())
        .unwrap_or(NOT_FOUND)
}

/// Start-of-packet and start-of-message markers.
pub fn solve(signal: &str) -> (i64, i64) {
    (
        find_marker(signal, PACKET_WINDOW),
        find_marker(signal, MESSAGE_WINDOW),
    )
}
