//! Campusfind - client-side data layer for a campus lost-and-found board.
//!
//! Campusfind backs a bulletin-board UI without any real server: two
//! stores hold the collections in memory, persist serialized snapshots
//! through a pluggable storage backend, and fabricate network latency
//! with fixed delays. The UI layer calls the store operations and
//! renders their results; it never touches store-held data directly.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`items`] - Item records, the moderation lifecycle, filters, and the item store
//! - [`seed`] - Fixture data loaded on first start
//! - [`session`] - Authentication, registration, and the active session
//! - [`storage`] - Persisted snapshot backends (file and in-memory)
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use campusfind::seed;
//! use campusfind::session::SessionStore;
//! use campusfind::storage::MemoryStorage;
//!
//! let mut session = SessionStore::open(MemoryStorage::new(), seed::seed_users())
//!     .unwrap()
//!     .with_latency(Duration::ZERO);
//!
//! let profile = session.login("user@campus.edu", "user123").unwrap();
//! assert_eq!(profile.name, "Regular User");
//! ```

use std::time::Duration;

pub mod error;
pub mod items;
pub mod seed;
pub mod session;
pub mod storage;

pub use error::{CampusfindError, Result};

/// Fixed delay applied before every simulated remote call resolves.
///
/// Injectable per store via `with_latency`; tests zero it out.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(800);
