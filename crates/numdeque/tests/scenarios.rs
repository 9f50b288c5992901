//! End-to-end usage scenarios through the public API only.

use numdeque::{NumericDeque, Registry};
use numdeque_test_utils::{ascending_in, deque_in, isolated_registry};

#[test]
fn sparse_set_zero_fills_gap() {
    let reg = isolated_registry();
    let mut da = NumericDeque::new_in(&reg);
    da.set(0, -1.2345);
    da.set(3, 1.2345);
    assert_eq!(da.size(), 4);
    assert_eq!(da.get(0), -1.2345);
    assert_eq!(da.get(1), 0.0);
    assert_eq!(da.get(2), 0.0);
    assert_eq!(da.get(3), 1.2345);
}

#[test]
fn push_back_renders_five_decimals() {
    let reg = isolated_registry();
    let mut da = NumericDeque::new_in(&reg);
    for v in [1.0, 2.0, 3.0, 4.0, 5.0] {
        da.push_back(v);
    }
    assert_eq!(
        da.to_debug_string(),
        "[1.00000,2.00000,3.00000,4.00000,5.00000]"
    );
}

#[test]
fn unique_keeps_first_occurrences() {
    let reg = isolated_registry();
    let src = deque_in(&reg, &[1.0, 2.0, 2.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    let u = src.unique();
    assert_eq!(u.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(src.size(), 8);
}

#[test]
fn split_ten_into_three() {
    let reg = isolated_registry();
    let src = ascending_in(&reg, 10);
    let split = src.split(3);
    assert_eq!(split.count, 3);
    assert_eq!(split.chunk_sizes(), vec![4, 4, 2]);
    assert_eq!(split.chunks[0].to_vec(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(split.chunks[2].to_vec(), vec![8.0, 9.0]);
}

#[test]
fn split_more_chunks_than_elements() {
    let reg = isolated_registry();
    let src = deque_in(&reg, &[7.0, 8.0, 9.0]);
    let split = src.split(5);
    assert_eq!(split.count, 3);
    assert_eq!(split.chunk_sizes(), vec![1, 1, 1]);
}

#[test]
#[should_panic(expected = "is empty")]
fn pop_back_on_empty_panics() {
    let reg = isolated_registry();
    let mut da = NumericDeque::new_in(&reg);
    da.pop_back();
}

#[test]
#[should_panic(expected = "has been destroyed")]
fn size_after_destroy_panics() {
    let reg = isolated_registry();
    let mut da = NumericDeque::new_in(&reg);
    da.push_back(1.0);
    da.destroy();
    let _ = da.size();
}

#[test]
fn both_ends_grow_past_initial_capacity() {
    let reg = isolated_registry();
    let mut da = NumericDeque::new_in(&reg);
    for i in 0..50 {
        da.push_back(i as f64);
        da.push_front(-(i as f64) - 1.0);
    }
    assert_eq!(da.size(), 100);
    assert!(da.capacity() >= 100);
    assert_eq!(da.first(), -50.0);
    assert_eq!(da.last(), 49.0);
    for i in 0..100 {
        assert_eq!(da.get(i), i as f64 - 50.0);
    }
}

#[test]
fn derived_pipeline_leaves_source_intact() {
    let reg = isolated_registry();
    let src = NumericDeque::range_in(0.0, 10.0, 1.0, &reg);
    let evens = src.filter(|x| x % 2.0 == 0.0);
    let doubled = evens.map(|x| x * 2.0);
    let joined = NumericDeque::concat(&doubled, &src.subarray(8, 10));

    assert_eq!(joined.to_vec(), vec![0.0, 4.0, 8.0, 12.0, 16.0, 8.0, 9.0]);
    assert_eq!(src.size(), 10);
    assert_eq!(joined.mean(), 57.0 / 7.0);
    assert_eq!(joined.median(), 8.0);
    assert_eq!(reg.count(), 4);
}

#[test]
fn queue_discipline_via_back_push_front_pop() {
    let reg = isolated_registry();
    let mut q = NumericDeque::new_in(&reg);
    for v in 1..=20 {
        q.push_back(f64::from(v));
    }
    let drained: Vec<f64> = (0..20).map(|_| q.pop_front()).collect();
    assert_eq!(drained, (1..=20).map(f64::from).collect::<Vec<_>>());
    assert!(q.is_empty());
}

#[test]
fn clear_then_reuse() {
    let reg = isolated_registry();
    let mut da = ascending_in(&reg, 30);
    da.clear();
    assert!(da.is_empty());
    da.push_front(2.0);
    da.push_back(3.0);
    assert_eq!(da.to_vec(), vec![2.0, 3.0]);
}

#[test]
fn default_registry_is_used_without_explicit_one() {
    let before = Registry::global().count();
    let da = NumericDeque::from_slice(&[1.0, 2.0]);
    assert_eq!(Registry::global().count(), before + 1);
    assert!(Registry::global().contains(da.id()));
}
