//! One-off loader that fills an empty database from `categories.csv` and
//! `ads.csv`.
//!
//! Rows go through the same validation as the HTTP layer and are inserted
//! one at a time in file order. There is no wrapping transaction: a failing
//! row stops the run and leaves earlier rows in place.

pub mod csv;
pub mod error;
pub mod loader;
