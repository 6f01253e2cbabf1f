// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod config;
pub mod context;
pub mod metadata;
pub mod schedule;
pub mod source;
pub mod stats;
pub mod teams;
pub mod views;
