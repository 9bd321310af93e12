//! Integration tests for the public KvFifo API.

use kvfifo::prelude::*;
use rstest::rstest;

// =============================================================================
// Queue Discipline
// =============================================================================

#[rstest]
fn test_mixed_workload_keeps_all_views_consistent() {
    let mut fifo = KvFifo::new();
    fifo.push("orders", 1);
    fifo.push("invoices", 2);
    fifo.push("orders", 3);
    fifo.push("payments", 4);
    fifo.push("invoices", 5);

    assert_eq!(fifo.len(), 5);
    assert_eq!(fifo.count(&"orders"), 2);
    assert_eq!(fifo.front(), Ok((&"orders", &1)));
    assert_eq!(fifo.back(), Ok((&"invoices", &5)));

    fifo.move_to_back(&"orders").unwrap();
    let entries: Vec<(&str, i32)> = fifo.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(
        entries,
        vec![
            ("invoices", 2),
            ("payments", 4),
            ("invoices", 5),
            ("orders", 1),
            ("orders", 3),
        ]
    );

    fifo.pop_key(&"invoices").unwrap();
    assert_eq!(fifo.first(&"invoices"), Ok((&"invoices", &5)));

    let keys: Vec<&&str> = fifo.keys().collect();
    assert_eq!(keys, vec![&"invoices", &"orders", &"payments"]);
}

#[rstest]
fn test_pop_drains_in_insertion_order() {
    let mut fifo: KvFifo<u8, char> = [(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')]
        .into_iter()
        .collect();

    let mut drained = Vec::new();
    while let Ok((key, value)) = fifo.front().map(|(key, value)| (*key, *value)) {
        drained.push((key, value));
        fifo.pop().unwrap();
    }

    assert_eq!(drained, vec![(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')]);
    assert!(fifo.is_empty());
}

// =============================================================================
// Error Handling
// =============================================================================

#[rstest]
fn test_errors_on_empty_container() {
    let mut fifo: KvFifo<String, i32> = KvFifo::new();

    assert_eq!(fifo.pop(), Err(KvFifoError::EmptyContainer));
    assert_eq!(fifo.front(), Err(KvFifoError::EmptyContainer));
    assert_eq!(fifo.back(), Err(KvFifoError::EmptyContainer));
    assert_eq!(fifo.count(&"anything".to_string()), 0);
}

#[rstest]
fn test_errors_after_clear() {
    let mut fifo = KvFifo::new();
    fifo.push("a".to_string(), 1);
    fifo.clear();

    assert!(fifo.is_empty());
    assert_eq!(fifo.pop(), Err(KvFifoError::EmptyContainer));
    assert_eq!(
        fifo.first(&"a".to_string()),
        Err(KvFifoError::KeyNotFound)
    );
    assert_eq!(fifo.count(&"a".to_string()), 0);
}

#[rstest]
fn test_error_implements_std_error() {
    let mut fifo: KvFifo<i32, i32> = KvFifo::new();
    let error: Box<dyn std::error::Error> = Box::new(fifo.pop().unwrap_err());
    assert_eq!(error.to_string(), "the container is empty");
}

#[rstest]
fn test_failed_operations_leave_container_unchanged() {
    let mut fifo: KvFifo<u8, i32> = [(1, 10), (2, 20)].into_iter().collect();
    let snapshot = fifo.clone();

    assert!(fifo.pop_key(&9).is_err());
    assert!(fifo.move_to_back(&9).is_err());
    assert!(fifo.first_mut(&9).is_err());
    assert_eq!(fifo, snapshot);
}

// =============================================================================
// Copy-on-Write Behavior
// =============================================================================

#[rstest]
fn test_clones_diverge_independently() {
    let mut original = KvFifo::new();
    original.push("a", 1);
    original.push("b", 2);

    let mut copy = original.clone();
    copy.push("c", 3);
    original.pop().unwrap();

    assert_eq!(original.len(), 1);
    assert_eq!(copy.len(), 3);
    assert_eq!(original.front(), Ok((&"b", &2)));
    assert_eq!(copy.front(), Ok((&"a", &1)));
}

#[rstest]
fn test_chain_of_clones() {
    let mut first = KvFifo::new();
    first.push(1, "one");

    let mut second = first.clone();
    let third = second.clone();

    second.push(2, "two");
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 2);
    assert_eq!(third.len(), 1);
    assert_eq!(first, third);
}

#[rstest]
fn test_mutable_accessor_write_stays_out_of_clones() {
    let mut fifo = KvFifo::new();
    fifo.push("a", 1);

    let shared_before = fifo.clone();
    let (key, value) = fifo.last_mut(&"a").unwrap();
    assert_eq!(key, &"a");
    *value = 100;

    let taken_while_exposed = fifo.clone();
    let (_, value) = fifo.back_mut().unwrap();
    *value = 200;

    assert_eq!(shared_before.last(&"a"), Ok((&"a", &1)));
    assert_eq!(taken_while_exposed.last(&"a"), Ok((&"a", &100)));
    assert_eq!(fifo.last(&"a"), Ok((&"a", &200)));
}

// =============================================================================
// Trait Surface
// =============================================================================

#[rstest]
fn test_collect_and_extend_round_trip() {
    let mut fifo: KvFifo<u8, i32> = (0u8..5).map(|index| (index % 2, i32::from(index))).collect();
    fifo.extend([(7, 70)]);

    let entries: Vec<(u8, i32)> = fifo.into_iter().collect();
    assert_eq!(entries, vec![(0, 0), (1, 1), (0, 2), (1, 3), (0, 4), (7, 70)]);
}

#[rstest]
fn test_equality_and_hashing() {
    use std::collections::HashSet;

    let left: KvFifo<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let right: KvFifo<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let different: KvFifo<&str, i32> = [("a", 1)].into_iter().collect();

    let mut set = HashSet::new();
    set.insert(left);
    assert!(set.contains(&right));
    assert!(!set.contains(&different));
}

#[rstest]
fn test_debug_output() {
    let fifo: KvFifo<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
    assert_eq!(format!("{fifo:?}"), r#"[("x", 1), ("y", 2)]"#);
}

#[rstest]
fn test_default_is_empty() {
    let fifo: KvFifo<String, String> = KvFifo::default();
    assert!(fifo.is_empty());
}

#[rstest]
fn test_iterators_report_exact_size() {
    let fifo: KvFifo<u8, i32> = [(2, 20), (1, 10), (2, 21)].into_iter().collect();

    let mut entries = fifo.iter();
    assert_eq!(entries.len(), 3);
    entries.next();
    assert_eq!(entries.len(), 2);

    let keys = fifo.keys();
    assert_eq!(keys.len(), 2);
}

// =============================================================================
// Key Sharing
// =============================================================================

#[rstest]
fn test_heavy_key_reuse_stores_one_key_object() {
    let mut fifo = KvFifo::new();
    for index in 0..100 {
        fifo.push("shared-key".to_string(), index);
    }

    let (first_key, _) = fifo.first(&"shared-key".to_string()).unwrap();
    let (last_key, _) = fifo.last(&"shared-key".to_string()).unwrap();
    assert!(std::ptr::eq(first_key, last_key));
    assert_eq!(fifo.count(&"shared-key".to_string()), 100);
}
