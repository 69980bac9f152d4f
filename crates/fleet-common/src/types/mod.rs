//! Core data types for Fleet Builder quoting

pub mod catalog;
pub mod quote;
