//! Grok Tweet Archive Analyser
//!
//! Author counts, reply-flag statistics and engagement metric distributions
//! over a read-only SQLite archive of tweets.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod export;
pub mod types;
pub mod utils;
