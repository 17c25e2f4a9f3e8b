//! Integration Tests Module
//!
//! End-to-end tests that run complete passes against seeded archives.

pub mod end_to_end;
pub mod missing_database;
