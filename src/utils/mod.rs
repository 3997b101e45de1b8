//! Utility modules for FinVani.
//!
//! - [`datetime`] - Parsing and display of headline publication dates

pub mod datetime;
