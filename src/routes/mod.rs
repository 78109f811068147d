//! HTML page handlers

pub mod analyzer;
