use crate::bench::{Dataset, Error, KeyKind, KeySource, Result};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// The keys of a loaded dataset.
#[derive(Debug, PartialEq)]
pub enum Keys {
    Integer(Vec<i32>),
    Text(Vec<String>),
}

impl Keys {
    pub fn len(&self) -> usize {
        match self {
            Keys::Integer(keys) => keys.len(),
            Keys::Text(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Dataset {
    pub fn load(&self, seed: u32) -> Result<Keys> {
        match (&self.source, self.kind) {
            (KeySource::File(path), KeyKind::Integer) => Ok(Keys::Integer(load_keys(path)?)),
            (KeySource::File(path), KeyKind::Text) => Ok(Keys::Text(load_keys(path)?)),
            (source, KeyKind::Integer) => {
                Ok(Keys::Integer(generate_integers(source, self.count, seed)))
            },
            (source, KeyKind::Text) => Ok(Keys::Text(generate_text(source, self.count, seed))),
        }
    }
}

/// Reads whitespace separated keys from a file.
pub fn load_keys<K, P>(path: P) -> Result<Vec<K>>
where
    K: FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    contents
        .split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| Error::ParseError {
                path: path.to_path_buf(),
                token: token.to_string(),
            })
        })
        .collect()
}

fn ordered(source: &KeySource, count: usize, seed: u32) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..count).collect();
    match source {
        KeySource::Decreasing => indices.reverse(),
        KeySource::Shuffled => {
            let mut rng = XorShiftRng::from_seed([seed, 1, 1, 1]);
            rng.shuffle(&mut indices);
        },
        KeySource::Increasing | KeySource::File(_) => {},
    }
    indices
}

/// Generates `count` distinct integer keys in the order `source` describes.
pub fn generate_integers(source: &KeySource, count: usize, seed: u32) -> Vec<i32> {
    ordered(source, count, seed)
        .into_iter()
        .map(|index| index as i32)
        .collect()
}

/// Generates `count` distinct text keys whose lexicographic order matches their numeric order.
pub fn generate_text(source: &KeySource, count: usize, seed: u32) -> Vec<String> {
    ordered(source, count, seed)
        .into_iter()
        .map(|index| format!("key{:08}", index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_integers, generate_text, load_keys, Keys};
    use crate::bench::{Dataset, Error, KeyKind, KeySource};
    use std::env;
    use std::fs;

    #[test]
    fn test_generate_orders() {
        assert_eq!(generate_integers(&KeySource::Increasing, 4, 1), vec![0, 1, 2, 3]);
        assert_eq!(generate_integers(&KeySource::Decreasing, 4, 1), vec![3, 2, 1, 0]);

        let mut shuffled = generate_integers(&KeySource::Shuffled, 100, 7);
        assert_eq!(shuffled, generate_integers(&KeySource::Shuffled, 100, 7));
        shuffled.sort();
        assert_eq!(shuffled, (0..100).collect::<Vec<i32>>());
    }

    #[test]
    fn test_generate_text_sorts_like_numbers() {
        let keys = generate_text(&KeySource::Increasing, 20, 1);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[3], "key00000003");
    }

    #[test]
    fn test_load_keys() {
        let path = env::temp_dir().join("dictionaries_test_load_keys.txt");
        fs::write(&path, "3 1\n2\n").unwrap();
        assert_eq!(load_keys::<i32, _>(&path).unwrap(), vec![3, 1, 2]);

        let dataset = Dataset {
            name: String::from("file"),
            kind: KeyKind::Text,
            source: KeySource::File(path.clone()),
            count: 0,
        };
        let keys = dataset.load(1).unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(
            keys,
            Keys::Text(vec![String::from("3"), String::from("1"), String::from("2")]),
        );
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_keys_parse_error() {
        let path = env::temp_dir().join("dictionaries_test_parse_error.txt");
        fs::write(&path, "1 two 3").unwrap();
        match load_keys::<i32, _>(&path) {
            Err(Error::ParseError { token, .. }) => assert_eq!(token, "two"),
            _ => panic!("Expected a parse error."),
        }
        fs::remove_file(&path).unwrap();
    }
}
