//! In-memory book catalog with a text menu front end.
//!
//! The catalog owns every book, hands out copies, and records a domain event
//! for each change. The `catalog` binary drives it from stdin.

pub mod books;
pub mod catalog;
pub mod core;
pub mod gateway;
pub mod utils;
