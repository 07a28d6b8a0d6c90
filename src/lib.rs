//! Kanban board core: an in-memory board document store with copy-on-write
//! snapshots, a drag-gesture resolver that turns drops into store
//! operations, and blob persistence attached through a store observer.

pub mod config;
pub mod domain;
pub mod drag;
pub mod persistence;
pub mod store;
