use common::init_logger;
use dynamic_orientation::segment_tree::{AddMax, AddSum, SegmentTree};
use rand::prelude::*;

mod common;

#[test]
fn test_range_add_range_max() {
    let mut tree: SegmentTree<AddMax> = SegmentTree::new(8);
    tree.range_update(1, 4, 3);
    tree.range_update(3, 6, 2);
    assert_eq!(tree.range_query(0, 7), 5);
    assert_eq!(tree.range_query(0, 2), 3);
    assert_eq!(tree.range_query(5, 7), 2);
    assert_eq!(tree.range_query(0, 0), 0);
    assert_eq!(tree.range_query(7, 7), 0);
}

#[test]
fn test_range_add_range_sum() {
    let mut tree: SegmentTree<AddSum> = SegmentTree::new(10);
    tree.range_update(0, 9, 1);
    assert_eq!(tree.range_query(0, 9), 10);
    tree.range_update(2, 4, 5);
    assert_eq!(tree.range_query(0, 9), 25);
    assert_eq!(tree.range_query(2, 2), 6);
    assert_eq!(tree.range_query(5, 9), 5);
}

#[test]
fn test_single_cell_domain() {
    let mut tree: SegmentTree<AddMax> = SegmentTree::new(1);
    assert_eq!(tree.range_query(0, 0), 0);
    tree.range_update(0, 0, 7);
    tree.range_update(0, 0, -2);
    assert_eq!(tree.range_query(0, 0), 5);
}

#[test]
fn test_non_power_of_two_size() {
    // The padded positions must not leak into queries within [0, size).
    let mut tree: SegmentTree<AddSum> = SegmentTree::new(5);
    tree.range_update(0, 4, 2);
    assert_eq!(tree.range_query(0, 4), 10);
    assert_eq!(tree.range_query(4, 4), 2);
}

fn random_compare_max(queries: usize, size: usize, seed: u64) {
    init_logger();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree: SegmentTree<AddMax> = SegmentTree::new(size);
    let mut reference = vec![0i64; size];

    for q in 0..queries {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        let (l, r) = (a.min(b), a.max(b));
        if rng.gen_bool(0.5) {
            let value = rng.gen_range(-20..=20);
            tree.range_update(l, r, value);
            for cell in &mut reference[l..=r] {
                *cell += value;
            }
        } else {
            let expected = *reference[l..=r].iter().max().unwrap();
            assert_eq!(tree.range_query(l, r), expected, "q {q}, query [{l}, {r}]");
        }
    }
}

fn random_compare_sum(queries: usize, size: usize, seed: u64) {
    init_logger();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree: SegmentTree<AddSum> = SegmentTree::new(size);
    let mut reference = vec![0i64; size];

    for q in 0..queries {
        let a = rng.gen_range(0..size);
        let b = rng.gen_range(0..size);
        let (l, r) = (a.min(b), a.max(b));
        if rng.gen_bool(0.5) {
            let value = rng.gen_range(-20..=20);
            tree.range_update(l, r, value);
            for cell in &mut reference[l..=r] {
                *cell += value;
            }
        } else {
            let expected: i64 = reference[l..=r].iter().sum();
            assert_eq!(tree.range_query(l, r), expected, "q {q}, query [{l}, {r}]");
        }
    }
}

#[test]
fn test_segment_cmp_max() {
    random_compare_max(4000, 100, 10000);
    random_compare_max(2000, 37, 4815);
}

#[test]
fn test_segment_cmp_sum() {
    random_compare_sum(4000, 100, 16342);
    random_compare_sum(2000, 64, 999);
}

#[test]
#[ignore]
fn test_segment_stress() {
    init_logger();
    loop {
        let seed = thread_rng().gen();
        log::info!("seed = {seed}");
        random_compare_max(20000, 128, seed);
        random_compare_sum(20000, 100, seed);
    }
}
