//! Core analysis of location timeline exports.
//!
//! This crate contains the pipeline that turns a parsed export into per-day
//! car travel totals:
//! - Document: loading the export and locating its entry list
//! - Activity: pulling activity records out of schema-variable entries
//! - Classify: deciding whether an activity is vehicle travel, reading distance
//! - Date: resolving an activity's calendar day from its start time
//! - Aggregate: summing distance per day and thresholding into a report

mod aggregate;
pub mod activity;
pub mod classify;
pub mod date;
pub mod document;

pub use aggregate::{Analysis, AnalysisStats, DayTotal, Report, analyze, analyze_document};
pub use date::{DateParseError, parse_date};
pub use document::{LoadError, load_document, locate_entries, parse_document};
