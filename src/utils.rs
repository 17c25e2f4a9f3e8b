//! Shared helpers for percentage arithmetic and elapsed-time formatting

pub mod math;
pub mod time;
