//! Per-day aggregation of vehicle distance and threshold reporting.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::activity::extract_activities;
use crate::classify::{candidate_type, distance_meters, is_vehicle_type};
use crate::date::resolve_day;
use crate::document::locate_entries;

/// Counters describing one analysis pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisStats {
    pub entries: usize,
    pub activities: usize,
    /// Vehicle activities whose distance was added to a day.
    pub aggregated: usize,
    pub skipped_no_distance: usize,
    pub skipped_not_vehicle: usize,
    pub skipped_no_start_time: usize,
    pub skipped_bad_start_time: usize,
}

/// Vehicle distance per calendar day, in meters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    pub daily_meters: BTreeMap<NaiveDate, f64>,
    pub stats: AnalysisStats,
}

/// One day over the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayTotal {
    pub date: NaiveDate,
    /// Kilometers, rounded to 3 decimals.
    pub km: f64,
}

/// Days whose vehicle distance exceeds a threshold, ascending by date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub threshold_km: f64,
    pub days: Vec<DayTotal>,
}

/// Locates the entries of a parsed export and analyzes them.
pub fn analyze_document(document: &Value) -> Analysis {
    analyze(locate_entries(document))
}

/// Sums vehicle distance per start day across all entries.
///
/// Each activity's full distance goes to the day it started on. Activities
/// without a usable distance, vehicle type or start time are skipped.
pub fn analyze(entries: &[Value]) -> Analysis {
    let mut analysis = Analysis::default();

    for entry in entries {
        analysis.stats.entries += 1;
        let Some(fields) = entry.as_object() else {
            continue;
        };

        for record in extract_activities(entry) {
            analysis.stats.activities += 1;

            let Some(meters) = distance_meters(record) else {
                analysis.stats.skipped_no_distance += 1;
                continue;
            };

            let kind = candidate_type(record);
            if !is_vehicle_type(kind) {
                tracing::trace!(kind, "skipping non-vehicle activity");
                analysis.stats.skipped_not_vehicle += 1;
                continue;
            }

            match resolve_day(fields, record) {
                Ok(Some(day)) => {
                    *analysis.daily_meters.entry(day).or_insert(0.0) += meters;
                    analysis.stats.aggregated += 1;
                }
                Ok(None) => {
                    tracing::debug!(kind, meters, "skipping vehicle activity without start time");
                    analysis.stats.skipped_no_start_time += 1;
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping vehicle activity");
                    analysis.stats.skipped_bad_start_time += 1;
                }
            }
        }
    }

    tracing::debug!(
        stats = ?analysis.stats,
        days = analysis.daily_meters.len(),
        "analysis complete"
    );
    analysis
}

impl Analysis {
    /// Selects the days strictly over `threshold_km`.
    ///
    /// The comparison uses the unrounded total; only the reported value is
    /// rounded to meters.
    pub fn report(&self, threshold_km: f64) -> Report {
        let days = self
            .daily_meters
            .iter()
            .filter_map(|(&date, &meters)| {
                let km = meters / 1000.0;
                (km > threshold_km).then(|| DayTotal {
                    date,
                    km: round_to_meters(km),
                })
            })
            .collect();

        Report { threshold_km, days }
    }
}

/// Rounds to 3 decimals from the exact binary value, ties to even.
///
/// Scaling by 1000 first would round `1.0005` (stored just below the tie)
/// up to `1.001`; formatting rounds the stored value itself.
fn round_to_meters(km: f64) -> f64 {
    format!("{km:.3}").parse().unwrap_or(km)
}
