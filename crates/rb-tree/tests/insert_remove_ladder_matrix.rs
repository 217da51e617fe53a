use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use rb_tree::RbTree;

fn insert_value(tree: &mut RbTree<i32>, value: i32) {
    tree.insert(value).unwrap();
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after insert({value}): {err}\n{}", tree.print());
    }
}

fn delete_value(tree: &mut RbTree<i32>, value: i32) {
    tree.remove(&value).unwrap();
    if let Err(err) = tree.assert_valid() {
        panic!("invalid red-black tree after remove({value}): {err}\n{}", tree.print());
    }
}

fn assert_height_bound(tree: &RbTree<i32>) {
    let n = tree.len() as f64;
    let bound = 2.0 * (n + 1.0).log2();
    assert!(
        tree.height() as f64 <= bound,
        "height {} exceeds 2*log2({n}+1) = {bound}",
        tree.height()
    );
}

#[test]
fn insert_delete_various_numbers_matrix() {
    let mut tree = RbTree::new();
    for value in [10, 11, 12, 50, 60, 25, 100, 88, 33, 22, 55, 59, 51] {
        insert_value(&mut tree, value);
    }
    assert_eq!(tree.len(), 13);

    delete_value(&mut tree, 100);
    assert_eq!(tree.len(), 12);

    delete_value(&mut tree, 33);
    assert!(tree.remove(&33).is_err());
    assert_eq!(tree.len(), 11);

    delete_value(&mut tree, 10);
    assert_eq!(tree.len(), 10);

    delete_value(&mut tree, 60);
    assert_eq!(tree.len(), 9);

    delete_value(&mut tree, 22);
    assert_eq!(tree.len(), 8);
}

#[test]
fn numbers_from_0_to_100_matrix() {
    let mut tree = RbTree::new();
    for i in 0..=100 {
        insert_value(&mut tree, i);
        assert_eq!(tree.len(), (i + 1) as usize);
        assert_height_bound(&tree);
    }
    for i in 0..=100 {
        delete_value(&mut tree, i);
        assert_eq!(tree.len(), (100 - i) as usize);
    }
    assert!(tree.is_empty());
}

#[test]
fn numbers_from_100_to_11_matrix() {
    let mut tree = RbTree::new();
    for i in (11..=100).rev() {
        insert_value(&mut tree, i);
    }
    for i in (11..=100).rev() {
        delete_value(&mut tree, i);
    }
    assert!(tree.root().is_none());
}

#[test]
fn numbers_both_directions_from_50_matrix() {
    let mut tree = RbTree::new();
    insert_value(&mut tree, 50);
    for i in 1..=100 {
        insert_value(&mut tree, 50 + i);
        insert_value(&mut tree, 50 - i);
        assert_eq!(tree.len(), (i * 2 + 1) as usize);
    }
    for i in 1..=100 {
        delete_value(&mut tree, 50 - i);
        delete_value(&mut tree, 50 + i);
    }
    delete_value(&mut tree, 50);
    assert!(tree.is_empty());
}

#[test]
fn remove_root_until_empty_matrix() {
    let mut tree = RbTree::new();
    for i in 0..64 {
        insert_value(&mut tree, (i * 37) % 64);
    }
    while let Some(root) = tree.root().map(|n| *n.key()) {
        delete_value(&mut tree, root);
    }
    assert_eq!(tree.len(), 0);
}

#[test]
fn seeded_random_workload_matrix() {
    for seed in [1u64, 7, 42, 2024] {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();

        for _ in 0..2_000 {
            let key: i32 = rng.gen_range(0..300);
            if rng.gen_bool(0.55) {
                assert_eq!(tree.insert(key).is_ok(), model.insert(key), "seed {seed}");
            } else {
                assert_eq!(tree.remove(&key).is_ok(), model.remove(&key), "seed {seed}");
            }
            if let Err(err) = tree.assert_valid() {
                panic!("seed {seed}: {err}\n{}", tree.print());
            }
            assert_eq!(tree.len(), model.len());
        }

        let keys: Vec<i32> = tree.view().keys().into_iter().copied().collect();
        assert_eq!(keys, model.iter().copied().collect::<Vec<_>>());
        assert_height_bound(&tree);
    }
}
