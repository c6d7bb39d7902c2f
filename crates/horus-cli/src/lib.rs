//! Support code for the `horus` binary: lexicon files and report output.

pub mod config;
pub mod report;
