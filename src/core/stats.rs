// src/core/stats.rs
//
// Thin guards around statrs: empty samples yield None instead of NaN,
// so absent budgets stay absent through every aggregation step.

use statrs::statistics::{Data, OrderStatistics, Statistics};

pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() { return None; }
    Some(Statistics::mean(xs.iter()))
}

/// Sample median (average of the two middle values for even counts).
pub fn median(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() { return None; }
    let mut data = Data::new(xs.to_vec());
    Some(data.median())
}

pub fn min(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() { return None; }
    Some(Statistics::min(xs.iter()))
}

pub fn max(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() { return None; }
    Some(Statistics::max(xs.iter()))
}
