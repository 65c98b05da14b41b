use common::init_logger;
use dynamic_orientation::interval_tree::IntervalTree;
use rand::prelude::*;

mod common;

fn naive_overlaps(stored: &[(usize, usize)], low: usize, high: usize) -> Vec<(usize, usize)> {
    let mut result: Vec<(usize, usize)> = stored
        .iter()
        .copied()
        .filter(|&(l, h)| l <= high && low <= h)
        .collect();
    result.sort();
    result
}

#[test]
fn test_overlap_queries() {
    let mut tree = IntervalTree::new();
    for (low, high) in [(1, 5), (3, 7), (6, 8), (10, 12)] {
        tree.insert(low, high);
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(tree.overlaps(4, 6), vec![(1, 5), (3, 7), (6, 8)]);
    assert_eq!(tree.overlaps(9, 9), vec![]);
    assert_eq!(tree.count_overlaps(4, 6), 3);
    assert_eq!(tree.count_overlaps(9, 9), 0);
    assert_eq!(tree.overlaps(0, 100).len(), 4);
}

#[test]
fn test_stabbing_point_queries() {
    let mut tree = IntervalTree::new();
    tree.insert(0, 4);
    tree.insert(2, 2);
    tree.insert(5, 9);
    assert_eq!(tree.overlaps(2, 2), vec![(0, 4), (2, 2)]);
    assert_eq!(tree.overlaps(4, 5), vec![(0, 4), (5, 9)]);
    assert_eq!(tree.overlaps(10, 10), vec![]);
}

#[test]
fn test_duplicates() {
    let mut tree = IntervalTree::new();
    tree.insert(3, 8);
    tree.insert(3, 8);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.count_overlaps(8, 8), 2);
    assert_eq!(tree.overlaps(0, 10), vec![(3, 8), (3, 8)]);

    assert!(tree.remove(3, 8));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.count_overlaps(8, 8), 1);
    assert!(tree.contains(3, 8));

    assert!(tree.remove(3, 8));
    assert!(tree.is_empty());
    assert!(!tree.remove(3, 8));
}

#[test]
fn test_insert_remove_round_trip() {
    let mut tree = IntervalTree::new();
    for (low, high) in [(1, 5), (3, 7), (6, 8)] {
        tree.insert(low, high);
    }
    tree.insert(2, 9);
    assert!(tree.remove(2, 9));
    assert_eq!(tree.overlaps(0, 100), vec![(1, 5), (3, 7), (6, 8)]);
}

fn random_compare_with_naive(queries: usize, coord_range: usize, seed: u64) {
    init_logger();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tree = IntervalTree::new();
    let mut stored: Vec<(usize, usize)> = Vec::new();

    for q in 0..queries {
        match rng.gen_range(0..100) {
            0..50 => {
                let a = rng.gen_range(0..coord_range);
                let b = rng.gen_range(0..coord_range);
                let (low, high) = (a.min(b), a.max(b));
                tree.insert(low, high);
                stored.push((low, high));
            }
            50..70 if !stored.is_empty() => {
                let position = rng.gen_range(0..stored.len());
                let (low, high) = stored.swap_remove(position);
                assert!(tree.remove(low, high));
            }
            _ => {
                let a = rng.gen_range(0..coord_range);
                let b = rng.gen_range(0..coord_range);
                let (low, high) = (a.min(b), a.max(b));
                let expected = naive_overlaps(&stored, low, high);
                assert_eq!(tree.overlaps(low, high), expected, "q {q}, query [{low}, {high}]");
                assert_eq!(tree.count_overlaps(low, high), expected.len());
            }
        }
        assert_eq!(tree.len(), stored.len());
    }
}

#[test]
fn test_interval_cmp1() {
    random_compare_with_naive(3000, 50, 4635);
}

#[test]
fn test_interval_cmp2() {
    random_compare_with_naive(1500, 1000, 2012);
}

#[test]
#[ignore]
fn test_interval_stress() {
    init_logger();
    loop {
        let seed = thread_rng().gen();
        log::info!("seed = {seed}");
        random_compare_with_naive(10000, 100, seed);
    }
}
