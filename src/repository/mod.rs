//! Repository layer: the in-memory inventory ledger
//!
//! All collections live in one [`Ledger`]. Domain operations are plain
//! synchronous methods on it, split by collection across the submodules.
//! [`Repository`] is the cloneable handle shared by services; every
//! operation holds the lock for its whole duration, so operations never
//! interleave.

pub mod copies;
pub mod libraries;
pub mod seed;
pub mod titles;
pub mod users;

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::{BookCopy, Library, Title, User},
};

/// In-memory collections with their id counters.
///
/// Counters only ever increase, so ids are never reused after a deletion.
/// An exhausted counter fails the operation instead of wrapping.
/// `copies` is kept in ascending id order: new copies are appended with
/// fresh ids and removals preserve order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    users: Vec<User>,
    libraries: Vec<Library>,
    titles: Vec<Title>,
    copies: Vec<BookCopy>,
    next_user_id: u32,
    next_library_id: u32,
    next_title_id: u32,
    next_copy_id: u32,
}

impl Ledger {
    /// Empty ledger, all counters at zero
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hand out the next id from `counter`
fn take_id(counter: &mut u32, kind: &str) -> AppResult<u32> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| AppError::Validation(format!("No {} ids left", kind)))?;
    Ok(id)
}

/// Shared handle to the ledger
#[derive(Clone)]
pub struct Repository {
    ledger: Arc<RwLock<Ledger>>,
}

impl Repository {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.ledger.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.ledger.write()
    }
}
