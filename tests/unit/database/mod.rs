//! Database module unit tests

pub mod loose_column_types;
