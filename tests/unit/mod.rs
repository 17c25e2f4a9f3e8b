//! Unit Tests Module

pub mod database;
