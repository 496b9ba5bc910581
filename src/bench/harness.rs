use crate::bench::{iterations_for, write_report_file, Config, Dataset, Keys, Result};
use crate::dictionary::Dictionary;
use crate::hash_table::{ChainedHashMap, SlotHash};
use crate::red_black_tree::RedBlackMap;
use log::{info, warn};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::fs;
use std::hash::Hash;
use std::thread;
use std::time::{Duration, Instant};

/// Averaged measurements for a single batch size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub elements: usize,
    pub insert_ns: u128,
    pub find_ns: u128,
    pub erase_ns: u128,
    pub memory_kib: usize,
}

fn fill<D, K>(dictionary: &mut D, keys: &[K])
where
    D: Dictionary<K, i32>,
    K: Clone,
{
    for key in keys {
        dictionary.insert(key.clone(), 1);
    }
}

/// Averaged bytes retained by a dictionary holding `keys`, in KiB. Samples where the counter
/// did not grow are discarded.
fn sample_memory<D, K>(keys: &[K], config: &Config, allocated: &dyn Fn() -> usize) -> usize
where
    D: Dictionary<K, i32> + Default,
    K: Clone,
{
    let mut total = 0;
    let mut samples = 0;
    for _ in 0..config.memory_samples {
        let before = allocated();
        let mut dictionary = D::default();
        fill(&mut dictionary, keys);
        let after = allocated();
        drop(dictionary);

        if after > before {
            total += after - before;
            samples += 1;
        }
        if config.memory_pause_ms > 0 {
            thread::sleep(Duration::from_millis(config.memory_pause_ms));
        }
    }

    if samples == 0 {
        0
    } else {
        total / samples / 1024
    }
}

/// Times batched inserts, finds and erases of the leading `size` keys for every configured size.
/// Sizes larger than the key set are skipped.
///
/// # Examples
///
/// ```
/// use dictionaries::bench::{measure, Config};
/// use dictionaries::red_black_tree::RedBlackMap;
///
/// let config = Config { sizes: vec![10, 100, 1_000], memory_samples: 1, ..Config::default() };
/// let keys: Vec<i32> = (0..100).collect();
/// let rows = measure::<RedBlackMap<i32, i32>, _>("red_black_map", &keys, &config, &|| 0);
///
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].elements, 100);
/// ```
pub fn measure<D, K>(
    subject: &str,
    keys: &[K],
    config: &Config,
    allocated: &dyn Fn() -> usize,
) -> Vec<Row>
where
    D: Dictionary<K, i32> + Default,
    K: Clone + Display,
{
    let mut rows = Vec::new();
    for &size in &config.sizes {
        if size > keys.len() {
            warn!(
                "[{}] Skipping size {}: only {} keys available.",
                subject,
                size,
                keys.len(),
            );
            continue;
        }

        let batch = &keys[..size];
        let iterations = iterations_for(size);
        let mut insert_ns = 0;
        let mut find_ns = 0;
        let mut erase_ns = 0;

        for _ in 0..iterations {
            let mut dictionary = D::default();

            let start = Instant::now();
            fill(&mut dictionary, batch);
            insert_ns += start.elapsed().as_nanos();

            let start = Instant::now();
            for key in batch {
                if dictionary.find(key).is_none() {
                    warn!("[{}] Key not found: {}", subject, key);
                }
            }
            find_ns += start.elapsed().as_nanos();

            let start = Instant::now();
            for key in batch {
                dictionary.erase(key);
            }
            erase_ns += start.elapsed().as_nanos();
        }

        let iterations = iterations as u128;
        let row = Row {
            elements: size,
            insert_ns: insert_ns / iterations,
            find_ns: find_ns / iterations,
            erase_ns: erase_ns / iterations,
            memory_kib: sample_memory::<D, K>(batch, config, allocated),
        };
        info!(
            "[{}] {} keys: insert {} ns, find {} ns, erase {} ns, {} KiB",
            subject, row.elements, row.insert_ns, row.find_ns, row.erase_ns, row.memory_kib,
        );
        rows.push(row);
    }
    rows
}

fn run_subject<D, K>(
    dataset: &Dataset,
    subject: &str,
    keys: &[K],
    config: &Config,
    allocated: &dyn Fn() -> usize,
) -> Result<()>
where
    D: Dictionary<K, i32> + Default,
    K: Clone + Display,
{
    let rows = measure::<D, K>(subject, keys, config, allocated);
    let path = config
        .output_dir
        .join(format!("{}_{}.txt", dataset.name, subject));
    write_report_file(&path, &rows)?;
    info!("Wrote {}.", path.display());
    Ok(())
}

fn run_subjects<K>(
    dataset: &Dataset,
    keys: &[K],
    config: &Config,
    allocated: &dyn Fn() -> usize,
) -> Result<()>
where
    K: Clone + Display + Ord + Hash + SlotHash,
{
    run_subject::<ChainedHashMap<K, i32>, K>(dataset, "chained_hash_map", keys, config, allocated)?;
    run_subject::<HashMap<K, i32>, K>(dataset, "hash_map", keys, config, allocated)?;
    run_subject::<RedBlackMap<K, i32>, K>(dataset, "red_black_map", keys, config, allocated)?;
    run_subject::<BTreeMap<K, i32>, K>(dataset, "btree_map", keys, config, allocated)?;
    Ok(())
}

/// Runs every container against every configured dataset and writes the reports to the
/// configured output directory.
pub fn run(config: &Config, allocated: &dyn Fn() -> usize) -> Result<()> {
    fs::create_dir_all(&config.output_dir)?;
    for dataset in &config.datasets {
        let keys = dataset.load(config.seed)?;
        info!("Dataset {}: {} keys.", dataset.name, keys.len());
        match keys {
            Keys::Integer(keys) => run_subjects(dataset, &keys, config, allocated)?,
            Keys::Text(keys) => run_subjects(dataset, &keys, config, allocated)?,
        }
    }
    Ok(())
}
