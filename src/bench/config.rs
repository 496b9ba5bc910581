use crate::bench::Result;
use serde_derive::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// The element type of a dataset.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum KeyKind {
    Integer,
    Text,
}

/// Where the keys of a dataset come from.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub enum KeySource {
    /// Whitespace separated keys read from a file.
    File(PathBuf),
    Increasing,
    Decreasing,
    /// Increasing keys shuffled with the configured seed.
    Shuffled,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Dataset {
    pub name: String,
    pub kind: KeyKind,
    pub source: KeySource,
    /// Number of keys to generate. Ignored for file sources.
    #[serde(default = "default_count")]
    pub count: usize,
}

/// Settings of a benchmark run. Every field is optional in the JSON form.
///
/// # Examples
///
/// ```
/// use dictionaries::bench::{Config, KeyKind, KeySource};
///
/// let config: Config = serde_json::from_str(r#"{
///     "sizes": [10, 100],
///     "datasets": [{ "name": "ints", "kind": "Integer", "source": "Shuffled", "count": 100 }]
/// }"#).unwrap();
///
/// assert_eq!(config.sizes, vec![10, 100]);
/// assert_eq!(config.datasets[0].source, KeySource::Shuffled);
/// assert_eq!(config.memory_samples, Config::default().memory_samples);
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub sizes: Vec<usize>,
    pub memory_samples: usize,
    /// Pause between memory samples, in milliseconds.
    pub memory_pause_ms: u64,
    pub output_dir: PathBuf,
    pub seed: u32,
    pub datasets: Vec<Dataset>,
}

fn default_count() -> usize {
    1_000_000
}

fn dataset(name: &str, kind: KeyKind, source: KeySource) -> Dataset {
    Dataset {
        name: name.to_string(),
        kind,
        source,
        count: default_count(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sizes: vec![10, 100, 1_000, 10_000, 100_000, 1_000_000],
            memory_samples: 5,
            memory_pause_ms: 0,
            output_dir: PathBuf::from("test_results"),
            seed: 1,
            datasets: vec![
                dataset("random_keys", KeyKind::Text, KeySource::Shuffled),
                dataset("decreasing_str_key", KeyKind::Text, KeySource::Decreasing),
                dataset("increasing_str_key", KeyKind::Text, KeySource::Increasing),
                dataset("shuffled_numbers", KeyKind::Integer, KeySource::Shuffled),
                dataset("decreasing_int_key", KeyKind::Integer, KeySource::Decreasing),
                dataset("increasing_int_key", KeyKind::Integer, KeySource::Increasing),
            ],
        }
    }
}

impl Config {
    pub fn from_file<P>(path: P) -> Result<Config>
    where
        P: AsRef<Path>,
    {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Number of repetitions used to average the timings of a batch of `size` keys.
pub fn iterations_for(size: usize) -> usize {
    match size {
        0..=10 => 1000,
        11..=100 => 100,
        101..=10_000 => 10,
        10_001..=100_000 => 5,
        _ => 3,
    }
}
