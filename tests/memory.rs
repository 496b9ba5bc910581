use dictionaries::bench::{measure, memory, Config};
use dictionaries::red_black_tree::RedBlackMap;

#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const BLOCK_SIZE: usize = 4 << 20;

fn allocated() -> usize {
    memory::allocated().unwrap()
}

#[test]
fn int_test_memory() {
    let before = allocated();
    let block = vec![1u8; BLOCK_SIZE];
    let after = allocated();
    assert_eq!(block.len(), BLOCK_SIZE);
    assert!(after >= before + BLOCK_SIZE / 2);

    let config = Config {
        sizes: vec![100_000],
        memory_samples: 2,
        ..Config::default()
    };
    let keys: Vec<u32> = (0..100_000).collect();
    let rows = measure::<RedBlackMap<u32, i32>, _>("red_black_map", &keys, &config, &allocated);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].memory_kib > 0);
}
