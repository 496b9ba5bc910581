//! Harness that times insert, find and erase batches and measures the memory footprint of any
//! `Dictionary`, writing one results table per dataset and container.

mod config;
mod dataset;
mod harness;
pub mod memory;
mod report;

pub use self::config::{iterations_for, Config, Dataset, KeyKind, KeySource};
pub use self::dataset::{generate_integers, generate_text, load_keys, Keys};
pub use self::harness::{measure, run, Row};
pub use self::report::{write_report, write_report_file};

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::result;

#[derive(Debug)]
pub enum Error {
    /// An input or output error.
    IOError(io::Error),
    /// A malformed configuration file.
    ConfigError(serde_json::Error),
    /// A token in a key file that does not parse as the dataset's key type.
    ParseError { path: PathBuf, token: String },
    /// A failed read of the allocator statistics.
    StatsError(tikv_jemalloc_ctl::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::ConfigError(err)
    }
}

impl From<tikv_jemalloc_ctl::Error> for Error {
    fn from(err: tikv_jemalloc_ctl::Error) -> Error {
        Error::StatsError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ConfigError(error) => Some(error),
            Error::ParseError { .. } | Error::StatsError(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ConfigError(error) => write!(f, "invalid config: {}", error),
            Error::ParseError { path, token } => {
                write!(f, "{}: cannot parse key `{}`", path.display(), token)
            },
            Error::StatsError(error) => write!(f, "cannot read allocator stats: {}", error),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
