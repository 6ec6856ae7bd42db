// src/analysis/jobs.rs
// Job Aggregator: collapse exploded records into one logical job per
// grouping key, with the job's distinct skill set and budget stats.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::sanitize::fold_label;
use crate::core::stats;
use crate::store::ExplodedRecord;

use super::types::{GlobalJob, JobKey, LogicalJob, SegmentKey};

struct SegAcc {
    skills: BTreeSet<String>,
    budgets: Vec<f64>,
}

/// Group records by the full (Job ID, Category, Job Type, Experience Level)
/// tuple. Grouping by Job ID alone would merge skill sets across segments
/// when the raw data carries inconsistent labels for one posting.
///
/// Records with a blank job id or skill should already be gone; any stragglers
/// are dropped, not grouped.
pub fn logical_jobs(records: &[ExplodedRecord]) -> Vec<LogicalJob> {
    let mut groups: BTreeMap<JobKey, SegAcc> = BTreeMap::new();

    for r in records {
        if r.job_id.is_empty() || r.skill.is_empty() {
            continue;
        }
        let key = JobKey {
            job_id: r.job_id.clone(),
            segment: SegmentKey::new(&r.category, &r.job_type, &r.experience),
        };
        let acc = groups
            .entry(key)
            .or_insert_with(|| SegAcc { skills: BTreeSet::new(), budgets: Vec::new() });
        acc.skills.insert(r.skill.clone());
        if let Some(b) = r.budget_avg {
            acc.budgets.push(b);
        }
    }

    groups
        .into_iter()
        .map(|(key, acc)| LogicalJob {
            key,
            skills: acc.skills.into_iter().collect(),
            budget_avg: stats::mean(&acc.budgets),
            budget_median: stats::median(&acc.budgets),
        })
        .collect()
}

struct GlobalAcc {
    skills: BTreeSet<String>,
    is_hourly: bool,
    is_fixed: bool,
    hourly: Vec<f64>,
    fixed: Vec<f64>,
}

/// The global analysis groups by raw Job ID alone — one job per posting over
/// the whole dataset — with hourly/fixed presence flags and label-restricted
/// budgets as a secondary, non-exclusive split. Mixed-labeled records set
/// both flags; that data-quality artifact is tolerated, not corrected.
pub fn global_jobs(records: &[ExplodedRecord]) -> Vec<GlobalJob> {
    let mut groups: BTreeMap<String, GlobalAcc> = BTreeMap::new();

    for r in records {
        if r.job_id.is_empty() || r.skill.is_empty() {
            continue;
        }
        let acc = groups.entry(r.job_id.clone()).or_insert_with(|| GlobalAcc {
            skills: BTreeSet::new(),
            is_hourly: false,
            is_fixed: false,
            hourly: Vec::new(),
            fixed: Vec::new(),
        });
        acc.skills.insert(r.skill.clone());

        match fold_label(&r.job_type).as_str() {
            "hourly" => {
                acc.is_hourly = true;
                if let Some(b) = r.budget_avg { acc.hourly.push(b); }
            }
            "fixed" => {
                acc.is_fixed = true;
                if let Some(b) = r.budget_avg { acc.fixed.push(b); }
            }
            _ => {}
        }
    }

    groups
        .into_iter()
        .map(|(job_id, acc)| GlobalJob {
            job_id,
            skills: acc.skills.into_iter().collect(),
            is_hourly: acc.is_hourly,
            is_fixed: acc.is_fixed,
            hourly_avg: stats::mean(&acc.hourly),
            hourly_median: stats::median(&acc.hourly),
            fixed_avg: stats::mean(&acc.fixed),
            fixed_median: stats::median(&acc.fixed),
        })
        .collect()
}
