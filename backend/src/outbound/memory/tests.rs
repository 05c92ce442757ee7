//! Tests for the in-memory user store.

use std::sync::Arc;
use std::thread;

use super::*;
use crate::domain::validation::validate;
use crate::domain::{CandidateRecord, UserId};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryUserStore {
    InMemoryUserStore::new()
}

fn valid_record(name: &str) -> ValidRecord {
    validate(CandidateRecord::new(
        name,
        "ABCDE1234F",
        "9876543210",
        "someone@example.com",
    ))
    .expect("fixture record is valid")
}

#[rstest]
fn first_insert_receives_identifier_one(store: InMemoryUserStore) {
    let user = store.insert(valid_record("Ada")).expect("insert");
    assert_eq!(user.id().get(), 1);
    assert_eq!(user.name(), "Ada");
}

#[rstest]
fn inserts_are_appended_in_order_with_increasing_ids(store: InMemoryUserStore) {
    for name in ["Ada", "Grace", "Edsger"] {
        store.insert(valid_record(name)).expect("insert");
    }

    let users = store.users().expect("snapshot");
    let summary: Vec<(u64, &str)> = users.iter().map(|u| (u.id().get(), u.name())).collect();
    assert_eq!(summary, vec![(1, "Ada"), (2, "Grace"), (3, "Edsger")]);
}

#[rstest]
fn duplicate_records_are_stored_separately(store: InMemoryUserStore) {
    let first = store.insert(valid_record("Ada")).expect("insert");
    let second = store.insert(valid_record("Ada")).expect("insert");
    assert_ne!(first.id(), second.id());
    assert_eq!(store.users().expect("snapshot").len(), 2);
}

#[rstest]
fn instances_do_not_share_state() {
    let left = InMemoryUserStore::new();
    let right = InMemoryUserStore::new();
    left.insert(valid_record("Ada")).expect("insert");

    let user = right.insert(valid_record("Grace")).expect("insert");
    assert_eq!(user.id().get(), 1);
    assert_eq!(left.users().expect("snapshot").len(), 1);
}

#[rstest]
fn exhausted_allocator_leaves_store_untouched() {
    let store = InMemoryUserStore::with_allocator(IdentifierAllocator::starting_at(u64::MAX));
    let last = store.insert(valid_record("Ada")).expect("last identifier");
    assert_eq!(last.id().get(), u64::MAX);

    let err = store
        .insert(valid_record("Grace"))
        .expect_err("identifiers exhausted");
    assert_eq!(err, UserStoreError::IdentifiersExhausted);
    assert_eq!(store.users().expect("snapshot").len(), 1);
}

#[rstest]
fn concurrent_inserts_yield_unique_contiguous_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 50;

    let store = Arc::new(InMemoryUserStore::new());
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                (0..PER_THREAD)
                    .map(|_| store.insert(valid_record("Ada")).expect("insert").id())
                    .collect::<Vec<UserId>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("thread completes"))
        .map(UserId::get)
        .collect();
    ids.sort_unstable();

    let expected: Vec<u64> = (1..=(THREADS * PER_THREAD) as u64).collect();
    assert_eq!(ids, expected);
}
