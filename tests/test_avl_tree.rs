extern crate float_avl;
extern crate rand;

use float_avl::avl_tree::tree;
use float_avl::avl_tree::{AvlSet, Error};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn distinct_values(rng: &mut StdRng, count: usize) -> Vec<f32> {
    let mut keys: Vec<i32> = (0..1000).collect();
    keys.shuffle(rng);
    keys.truncate(count);
    keys.into_iter().map(|key| key as f32).collect()
}

#[test]
fn test_build_scenario() {
    let set = AvlSet::from_values(&[40.0, 20.0, 10.0, 30.0, 80.0, 60.0, 50.0, 70.0, 90.0, 100.0])
        .unwrap();
    assert_eq!(
        set.traverse(),
        vec![40.0, 20.0, 10.0, 30.0, 80.0, 60.0, 50.0, 70.0, 90.0, 100.0],
    );
    assert_eq!(set.height(), 4);
}

#[test]
fn test_rotate_right_needs_left_child() {
    let mut root = None;
    assert_eq!(tree::insert(&mut root, 10.0), Ok(true));
    assert_eq!(tree::insert(&mut root, 20.0), Ok(true));
    assert_eq!(tree::rotate_right(&mut root), Err(Error::InvalidRotation));
    assert_eq!(tree::rotate_left(&mut root), Ok(()));
    assert_eq!(tree::traverse(&root), vec![20.0, 10.0]);
}

#[test]
fn test_remove_first_input_and_missing_value() {
    let mut rng = StdRng::seed_from_u64(1);
    let values = distinct_values(&mut rng, 10);
    let mut set = AvlSet::from_values(&values).unwrap();

    let max = set.maximum().map(|node| node.value()).unwrap();
    assert_eq!(set.remove(values[0]), Ok(()));
    assert_eq!(set.remove(max + 1.0), Err(Error::OutOfRange));
    assert_eq!(set.len(), 9);
    assert_eq!(set.check_consistency(), Ok(()));
}

#[test]
fn test_empty_tree_contract() {
    let mut set = AvlSet::new();
    assert_eq!(set.search(1.0).map(|node| node.value()), Err(Error::NotFound));
    assert_eq!(set.remove(1.0), Err(Error::NotFound));
    assert_eq!(set.minimum().map(|node| node.value()), Err(Error::OutOfRange));
    assert_eq!(set.maximum().map(|node| node.value()), Err(Error::OutOfRange));
    assert!(set.traverse().is_empty());
}

#[test]
fn test_minimum_of_subtree() {
    let set = AvlSet::from_values(&[4.0, 2.0, 6.0, 1.0, 3.0, 5.0, 7.0]).unwrap();
    let right = set.root().and_then(|node| node.right()).unwrap();
    assert_eq!(right.value(), 6.0);
    assert_eq!(right.left().map(|node| node.value()), Some(5.0));
}

#[test]
fn test_search_round_trip() {
    let mut rng = StdRng::seed_from_u64(2);
    let values = distinct_values(&mut rng, 200);
    let mut set = AvlSet::from_values(&values).unwrap();

    for value in &values {
        assert_eq!(set.search(*value).map(|node| node.value()), Ok(*value));
    }
    for value in values.iter().step_by(2) {
        assert_eq!(set.remove(*value), Ok(()));
        assert_eq!(set.search(*value).map(|node| node.value()), Err(Error::OutOfRange));
    }
    for value in values.iter().skip(1).step_by(2) {
        assert!(set.contains(*value));
    }
}

#[test]
fn test_remove_all() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut values = distinct_values(&mut rng, 300);
    let mut set = AvlSet::from_values(&values).unwrap();

    values.shuffle(&mut rng);
    for value in &values {
        assert_eq!(set.remove(*value), Ok(()));
        assert_eq!(set.check_consistency(), Ok(()));
    }
    assert!(set.is_empty());
    assert_eq!(set.height(), 0);
}

#[test]
fn test_ascending_inserts_stay_balanced() {
    let mut set = AvlSet::new();
    for i in 0..1023 {
        assert_eq!(set.insert(i as f32), Ok(true));
    }
    assert_eq!(set.height(), 10);
    assert_eq!(set.check_consistency(), Ok(()));
}

#[test]
fn test_random_operations() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut set = AvlSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..10_000 {
        let key: i32 = rng.gen_range(-500..500);
        if rng.gen_bool(0.6) {
            assert_eq!(set.insert(key as f32), Ok(expected.insert(key)));
        } else {
            let status = set.remove(key as f32);
            if expected.is_empty() {
                assert_eq!(status, Err(Error::NotFound));
            } else if expected.remove(&key) {
                assert_eq!(status, Ok(()));
            } else {
                assert_eq!(status, Err(Error::OutOfRange));
            }
        }
        assert_eq!(set.check_consistency(), Ok(()));
        assert_eq!(set.len(), expected.len());
    }

    let actual: Vec<f32> = set.iter().collect();
    let expected: Vec<f32> = expected.iter().map(|key| *key as f32).collect();
    assert_eq!(actual, expected);
}
