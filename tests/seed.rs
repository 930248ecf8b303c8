//! Tests for the deterministic seeding utility.
use greenfork::seed::SeededRng;

#[test]
fn same_seed_same_sequence() {
    let mut a = SeededRng::from_seed("dar-el-bey-48.88-2.32");
    let mut b = SeededRng::from_seed("dar-el-bey-48.88-2.32");
    for _ in 0..32 {
        assert_eq!(a.next_f64(), b.next_f64());
    }
}

#[test]
fn different_labels_different_streams() {
    let mut carbon = SeededRng::labeled("resto-1", "carbon");
    let mut pleasure = SeededRng::labeled("resto-1", "pleasure");
    assert_ne!(carbon.next_f64(), pleasure.next_f64());
}

#[test]
fn values_stay_in_unit_interval() {
    let mut rng = SeededRng::from_seed("bounds");
    for _ in 0..1000 {
        let v = rng.next_f64();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn next_in_respects_range() {
    let mut rng = SeededRng::labeled("bounds", "carbon");
    for _ in 0..1000 {
        let v = rng.next_in(2.5, 5.0);
        assert!((2.5..5.0).contains(&v));
    }
}

#[test]
fn shuffle_is_a_permutation() {
    let mut items: Vec<u32> = (0..50).collect();
    SeededRng::from_seed("shuffle-me").shuffle(&mut items);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
}

#[test]
fn shuffle_is_deterministic() {
    let mut a: Vec<u32> = (0..20).collect();
    let mut b: Vec<u32> = (0..20).collect();
    SeededRng::from_seed("le-bistrot").shuffle(&mut a);
    SeededRng::from_seed("le-bistrot").shuffle(&mut b);
    assert_eq!(a, b);
}

#[test]
fn shuffle_actually_reorders() {
    let mut items: Vec<u32> = (0..50).collect();
    SeededRng::from_seed("le-bistrot").shuffle(&mut items);
    assert_ne!(items, (0..50).collect::<Vec<u32>>());
}

#[test]
fn degenerate_seeds_do_not_panic() {
    let mut rng = SeededRng::from_seed("");
    let v = rng.next_f64();
    assert!((0.0..1.0).contains(&v));

    let mut empty: Vec<u32> = Vec::new();
    SeededRng::from_seed("").shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec![7];
    SeededRng::from_seed("").shuffle(&mut single);
    assert_eq!(single, vec![7]);
}
