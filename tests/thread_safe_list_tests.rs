//! Integration tests for the thread-safe list backing.
//!
//! These tests verify that `PersistentList` works correctly with the
//! `arc` feature enabled: immutable lists can be shared across threads
//! and each thread can derive new versions without synchronization.

#![cfg(feature = "arc")]

use conslist::persistent::PersistentList;
use rstest::rstest;
use std::sync::Arc;
use std::thread;

#[rstest]
fn test_list_cross_thread_structural_sharing() {
    let original = Arc::new(PersistentList::new().cons(3).cons(2).cons(1));

    let handles: Vec<_> = (0..4)
        .map(|index| {
            let list_clone = Arc::clone(&original);
            thread::spawn(move || {
                // Each thread creates a new version by prepending
                let extended = list_clone.cons(index * 10);
                assert_eq!(extended.head(), Some(&(index * 10)));
                assert_eq!(extended.len(), 4);
                // Original should be unchanged
                assert_eq!(list_clone.len(), 3);
                extended
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    // Every thread saw the same shared tail
    for extended in results {
        assert_eq!(extended.tail(), *original);
    }
}

#[rstest]
fn test_concurrent_readers_need_no_synchronization() {
    let list: PersistentList<u64> = (0..1000).collect();
    let shared = Arc::new(list);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let reader = Arc::clone(&shared);
            thread::spawn(move || reader.fold_left(0_u64, |accumulator, x| accumulator + x))
        })
        .collect();

    let expected = 1000 * 999 / 2;
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[rstest]
fn test_transforms_are_thread_local_versions() {
    let shared = Arc::new(PersistentList::from_slice(&[1, 2, 3, 4, 5]));

    let evens_handle = {
        let list = Arc::clone(&shared);
        thread::spawn(move || list.filter(|x| x % 2 == 0).to_vec())
    };
    let doubled_handle = {
        let list = Arc::clone(&shared);
        thread::spawn(move || list.map(|x| x * 2).to_vec())
    };

    assert_eq!(evens_handle.join().unwrap(), vec![2, 4]);
    assert_eq!(doubled_handle.join().unwrap(), vec![2, 4, 6, 8, 10]);
    assert_eq!(shared.to_vec(), vec![1, 2, 3, 4, 5]);
}
