const NUM_OF_OPERATIONS: usize = 100_000;

macro_rules! map_tests {
    ($($module_name:ident: $type_name:ident$(,)*)*) => {
        $(
            mod $module_name {
                use dictionaries::$module_name::$type_name;
                use rand::Rng;
                use std::collections::HashMap;
                use super::NUM_OF_OPERATIONS;

                #[test]
                fn int_test_map() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = HashMap::new();

                    for _ in 0..NUM_OF_OPERATIONS {
                        let key = rng.gen_range(0, 10_000u32);
                        let val = rng.gen::<u32>();

                        match rng.gen_range(0, 4) {
                            0 | 1 => {
                                assert_eq!(map.insert(key, val), expected.insert(key, val).is_none());
                            },
                            2 => {
                                assert_eq!(map.remove(&key), expected.remove(&key).map(|val| (key, val)));
                            },
                            _ => {
                                assert_eq!(map.get(&key), expected.get(&key));
                            },
                        }
                        assert_eq!(map.len(), expected.len());
                    }

                    let mut actual: Vec<(&u32, &u32)> = map.iter().collect();
                    let mut expected: Vec<(&u32, &u32)> = expected.iter().collect();
                    actual.sort();
                    expected.sort();
                    assert_eq!(actual, expected);
                }

                #[test]
                fn string_test_map() {
                    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                    let mut map = $type_name::new();
                    let mut expected = HashMap::new();

                    for _ in 0..NUM_OF_OPERATIONS / 10 {
                        let key = format!("key{}", rng.gen_range(0, 1_000u32));
                        let val = rng.gen::<u32>();

                        if rng.gen() {
                            map.insert(key.clone(), val);
                            expected.insert(key, val);
                        } else {
                            assert_eq!(map.erase(key.as_str()), expected.remove(&key).is_some());
                        }
                    }

                    assert_eq!(map.len(), expected.len());
                    for (key, val) in &expected {
                        assert_eq!(map[key.as_str()], *val);
                    }
                }
            }
        )*
    }
}

map_tests!(red_black_tree: RedBlackMap, hash_table: ChainedHashMap);

mod red_black_tree_order {
    use dictionaries::red_black_tree::RedBlackMap;
    use rand::Rng;
    use std::collections::BTreeMap;
    use super::NUM_OF_OPERATIONS;

    #[test]
    fn int_test_order() {
        let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
        let mut map = RedBlackMap::new();
        let mut expected = BTreeMap::new();

        for _ in 0..NUM_OF_OPERATIONS {
            let key = rng.gen::<u32>();
            let val = rng.gen::<u32>();

            map.insert(key, val);
            expected.insert(key, val);
        }

        assert_eq!(map.min(), expected.keys().next());
        assert_eq!(map.max(), expected.keys().next_back());
        assert_eq!(
            map.iter().collect::<Vec<(&u32, &u32)>>(),
            expected.iter().collect::<Vec<(&u32, &u32)>>(),
        );

        for _ in 0..1_000 {
            let key = rng.gen::<u32>();
            assert_eq!(map.floor(&key), expected.range(..=key).next_back().map(|(k, _)| k));
            assert_eq!(map.ceil(&key), expected.range(key..).next().map(|(k, _)| k));
        }

        assert_eq!(
            map.into_iter().collect::<Vec<(u32, u32)>>(),
            expected.into_iter().collect::<Vec<(u32, u32)>>(),
        );
    }

    #[test]
    fn int_test_pool_reuse() {
        let mut map = RedBlackMap::new();
        for key in 0..1_000 {
            map.insert(key, key);
        }
        let capacity = map.capacity();
        for key in 0..1_000 {
            assert!(map.erase(&key));
        }
        assert!(map.is_empty());
        assert_eq!(map.free_nodes(), capacity);

        for key in (0..1_000).rev() {
            map.insert(key, key);
        }
        assert_eq!(map.capacity(), capacity);
        assert_eq!(map.free_nodes(), 0);
        assert_eq!(map.len() + map.free_nodes(), map.capacity());
    }
}
