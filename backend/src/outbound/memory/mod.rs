//! Process-local repositories.
//!
//! Used when no database is configured and by the HTTP integration tests.
//! Records live in insertion order behind a `Mutex`; listings are sorted on
//! read so ties on `created_at` resolve to the most recent insert.

mod special_repository;
mod user_repository;

pub use special_repository::InMemorySpecialRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

/// Lock `store`, reporting poisoning through `on_poison`.
fn lock_store<'a, T, E>(
    store: &'a Mutex<Vec<T>>,
    on_poison: impl FnOnce(String) -> E,
) -> Result<MutexGuard<'a, Vec<T>>, E> {
    store
        .lock()
        .map_err(|err| on_poison(format!("in-memory store poisoned: {err}")))
}

/// Clone matching records, newest first.
fn newest_first<T: Clone>(
    records: &[T],
    created_at: impl Fn(&T) -> DateTime<Utc>,
    keep: impl Fn(&T) -> bool,
) -> Vec<T> {
    let mut selected: Vec<T> = records.iter().rev().filter(|r| keep(r)).cloned().collect();
    selected.sort_by_key(|record| std::cmp::Reverse(created_at(record)));
    selected
}
