//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `movievault_core::storage`, selected at compile time via
//! feature flags, plus the cache-aside decorator that wraps whichever
//! backend is active.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): In-memory storage backend, also the reference for
//!   the criteria query semantics
//! - `sqlite`: SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "sqlite"))]
compile_error!(
    "Features 'inmemory' and 'sqlite' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "sqlite")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'sqlite' feature. \
    Example: cargo build -p movievault --features inmemory"
);

pub mod cached;

// The in-memory backend doubles as the test store for the router tests, so
// it is compiled for test builds regardless of the selected backend.
#[cfg(any(feature = "inmemory", test))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Re-export the active repository implementation
#[cfg(any(feature = "inmemory", test))]
#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
#[allow(unused_imports)]
pub use sqlite::SqliteRepository;
