use std::io;
use thiserror::Error;

/// The primary error type for the `hidport-lib` library.
///
/// Only failures that abort a transport call live here. A failed individual
/// read attempt is masked inside the poll loop and never surfaces as a
/// `PortError`.
#[derive(Error, Debug)]
pub enum PortError {
    #[error("USB open error on {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("USB write error after {frames_written} frame(s): {source}")]
    Write {
        frames_written: usize,
        #[source]
        source: io::Error,
    },
}
