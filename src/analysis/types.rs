// src/analysis/types.rs

/// Grouping granularity for the segmented analysis.
/// Country is deliberately not part of the key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentKey {
    pub category: String,
    pub job_type: String,
    pub experience: String,
}

impl SegmentKey {
    pub fn new(category: &str, job_type: &str, experience: &str) -> Self {
        Self {
            category: category.to_string(),
            job_type: job_type.to_string(),
            experience: experience.to_string(),
        }
    }
}

/// The unit of analysis: a posting disambiguated by its segment key.
/// The same raw Job ID under inconsistent segment labels forms distinct
/// logical jobs on purpose; merging them would leak data across segments.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct JobKey {
    pub job_id: String,
    pub segment: SegmentKey,
}

#[derive(Clone, Debug)]
pub struct LogicalJob {
    pub key: JobKey,
    /// Distinct skills, lexicographically sorted.
    pub skills: Vec<String>,
    /// Mean of the non-null Budget Avg values across member records.
    pub budget_avg: Option<f64>,
    /// Median of the same values.
    pub budget_median: Option<f64>,
}

/// Per-job view for the global (unsegmented) analysis: grouped by raw
/// Job ID alone, with hourly/fixed presence flags as a secondary split.
#[derive(Clone, Debug)]
pub struct GlobalJob {
    pub job_id: String,
    pub skills: Vec<String>,
    pub is_hourly: bool,
    pub is_fixed: bool,
    pub hourly_avg: Option<f64>,
    pub hourly_median: Option<f64>,
    pub fixed_avg: Option<f64>,
    pub fixed_median: Option<f64>,
}

/// One output row of the segmented calculator.
#[derive(Clone, Debug)]
pub struct SegPairRow {
    pub segment: SegmentKey,
    pub skill_a: String,
    pub skill_b: String,
    pub jobs_count: u64,
    pub avg_budget: Option<f64>,
    pub median_budget: Option<f64>,
    pub min_budget: Option<f64>,
    pub max_budget: Option<f64>,
    pub support_a: u64,
    pub support_b: u64,
    pub support_ab: u64,
    pub confidence_ab: f64,
    pub confidence_ba: f64,
    pub lift: f64,
    pub jaccard: f64,
}

impl SegPairRow {
    /// The count fields the verifier cross-checks.
    pub fn stored(&self) -> StoredPair {
        StoredPair {
            segment: self.segment.clone(),
            skill_a: self.skill_a.clone(),
            skill_b: self.skill_b.clone(),
            jobs_count: self.jobs_count,
            support_a: self.support_a,
            support_b: self.support_b,
            support_ab: self.support_ab,
        }
    }
}

/// One output row of the global calculator.
#[derive(Clone, Debug)]
pub struct GlobalPairRow {
    pub skill_a: String,
    pub skill_b: String,
    pub support_ab: u64,
    pub support_a: u64,
    pub support_b: u64,
    pub confidence_ab: f64,
    pub confidence_ba: f64,
    pub lift: f64,
    pub jaccard: f64,
    pub hourly_jobs: u64,
    pub fixed_jobs: u64,
    pub hourly_avg: Option<f64>,
    pub hourly_median: Option<f64>,
    pub fixed_avg: Option<f64>,
    pub fixed_median: Option<f64>,
}

/// Count columns of a previously written segmented table, as the verifier
/// reads them back. Metric columns are not re-checked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredPair {
    pub segment: SegmentKey,
    pub skill_a: String,
    pub skill_b: String,
    pub jobs_count: u64,
    pub support_a: u64,
    pub support_b: u64,
    pub support_ab: u64,
}

/// Rendered table ready for export.
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/* ---------------- Cell formatting ---------------- */

pub fn fmt_num(v: f64) -> String {
    format!("{v}")
}

/// Absent budgets render as empty cells, never as zero.
pub fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => fmt_num(x),
        None => s!(),
    }
}
