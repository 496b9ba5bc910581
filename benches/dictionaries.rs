use criterion::{criterion_group, criterion_main};

const NUM_OF_OPERATIONS: usize = 1_000;

macro_rules! dictionary_benches {
    ($($module_name:ident: $type_name:ty,)*) => {
        $(
            mod $module_name {
                use criterion::{black_box, Criterion};
                use dictionaries::dictionary::Dictionary;
                use rand::Rng;
                use super::NUM_OF_OPERATIONS;

                fn filled() -> ($type_name, Vec<u32>) {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = <$type_name>::default();
                    let mut keys = Vec::new();
                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.next_u32();
                        let val = rng.next_u32();

                        Dictionary::insert(&mut map, key, val);
                        keys.push(key);
                    }
                    (map, keys)
                }

                pub fn bench_insert(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} insert", stringify!($module_name)), |b| b.iter(|| {
                        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                        let mut map = <$type_name>::default();
                        for _ in 0..NUM_OF_OPERATIONS {
                            let key = rng.next_u32();
                            let val = rng.next_u32();

                            Dictionary::insert(&mut map, key, val);
                        }
                        map
                    }));
                }

                pub fn bench_find(c: &mut Criterion) {
                    let (map, keys) = filled();
                    c.bench_function(&format!("bench {} find", stringify!($module_name)), move |b| b.iter(|| {
                        for key in &keys {
                            black_box(Dictionary::find(&map, key));
                        }
                    }));
                }

                pub fn bench_erase(c: &mut Criterion) {
                    c.bench_function(&format!("bench {} erase", stringify!($module_name)), |b| b.iter(|| {
                        let (mut map, keys) = filled();
                        for key in &keys {
                            black_box(Dictionary::erase(&mut map, key));
                        }
                    }));
                }
            }
        )*

        criterion_group!(
            benches,
            $(
                $module_name::bench_insert,
                $module_name::bench_find,
                $module_name::bench_erase,
            )*
        );
    }
}

dictionary_benches!(
    red_black_map: dictionaries::red_black_tree::RedBlackMap<u32, u32>,
    chained_hash_map: dictionaries::hash_table::ChainedHashMap<u32, u32>,
    btree_map: std::collections::BTreeMap<u32, u32>,
    hash_map: std::collections::HashMap<u32, u32>,
);

criterion_main!(benches);
