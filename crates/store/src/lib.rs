//! In-memory storage behind the reference backend.
//!
//! Repositories are free functions over a shared [`StorePool`], one module per
//! resource, so handlers read the same way they would against a database pool.

pub mod models;
pub mod repositories;

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use slotkeeper_core::models::{appointment::Appointment, schedule::ScheduleDay};
use tokio::sync::RwLock;

use crate::models::StoredException;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) weekly: RwLock<Vec<ScheduleDay>>,
    pub(crate) exceptions: RwLock<Vec<StoredException>>,
    pub(crate) appointments: RwLock<Vec<Appointment>>,
    sequence: AtomicU64,
}

impl MemoryStore {
    /// Monotonic insertion counter, used to order exceptions on the same date.
    pub(crate) fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub type StorePool = Arc<MemoryStore>;

pub fn create_pool() -> StorePool {
    Arc::new(MemoryStore::default())
}
