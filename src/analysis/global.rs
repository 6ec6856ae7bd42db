// src/analysis/global.rs
// Support & Metric Calculator, global variant: one implicit segment over the
// whole dataset, with an hourly/fixed budget split that never touches the
// support counts.

use std::collections::BTreeMap;

use crate::core::stats;
use crate::store::ExplodedRecord;

use super::jobs;
use super::pairs::skill_pairs;
use super::types::{fmt_num, fmt_opt, GlobalJob, GlobalPairRow, Table};

pub const HEADERS: [&str; 15] = [
    "Skill A", "Skill B",
    "Support AB", "Support A", "Support B",
    "Confidence A→B", "Confidence B→A", "Lift", "Jaccard",
    "Hourly_Jobs", "Fixed_Jobs",
    "Hourly_Avg", "Hourly_Median", "Fixed_Avg", "Fixed_Median",
];

struct PairAcc {
    jobs: u64,
    hourly_jobs: u64,
    fixed_jobs: u64,
    // per-contributing-job stats; None entries are skipped at collection time
    hourly_avgs: Vec<f64>,
    hourly_medians: Vec<f64>,
    fixed_avgs: Vec<f64>,
    fixed_medians: Vec<f64>,
}

pub fn analyze(records: &[ExplodedRecord]) -> Vec<GlobalPairRow> {
    rows_from_jobs(&jobs::global_jobs(records))
}

pub fn rows_from_jobs(jobs: &[GlobalJob]) -> Vec<GlobalPairRow> {
    let total_jobs = jobs.len() as u64;

    // Single-skill supports over every job, pair-bearing or not.
    let mut supports: BTreeMap<&str, u64> = BTreeMap::new();
    let mut acc: BTreeMap<(&str, &str), PairAcc> = BTreeMap::new();

    for job in jobs {
        for skill in &job.skills {
            *supports.entry(skill.as_str()).or_insert(0) += 1;
        }
        for (a, b) in skill_pairs(&job.skills) {
            let entry = acc.entry((a, b)).or_insert_with(|| PairAcc {
                jobs: 0,
                hourly_jobs: 0,
                fixed_jobs: 0,
                hourly_avgs: Vec::new(),
                hourly_medians: Vec::new(),
                fixed_avgs: Vec::new(),
                fixed_medians: Vec::new(),
            });
            entry.jobs += 1;
            entry.hourly_jobs += job.is_hourly as u64;
            entry.fixed_jobs += job.is_fixed as u64;
            if let Some(v) = job.hourly_avg { entry.hourly_avgs.push(v); }
            if let Some(v) = job.hourly_median { entry.hourly_medians.push(v); }
            if let Some(v) = job.fixed_avg { entry.fixed_avgs.push(v); }
            if let Some(v) = job.fixed_median { entry.fixed_medians.push(v); }
        }
    }

    let mut rows = Vec::with_capacity(acc.len());
    for (&(a, b), pair) in acc.iter() {
        let support_a = supports[a];
        let support_b = supports[b];
        let support_ab = pair.jobs;

        rows.push(GlobalPairRow {
            skill_a: a.to_string(),
            skill_b: b.to_string(),
            support_ab,
            support_a,
            support_b,
            confidence_ab: support_ab as f64 / support_a as f64,
            confidence_ba: support_ab as f64 / support_b as f64,
            lift: (support_ab as f64 * total_jobs as f64)
                / (support_a as f64 * support_b as f64),
            jaccard: support_ab as f64 / (support_a + support_b - support_ab) as f64,
            hourly_jobs: pair.hourly_jobs,
            fixed_jobs: pair.fixed_jobs,
            hourly_avg: stats::mean(&pair.hourly_avgs),
            hourly_median: stats::median(&pair.hourly_medians),
            fixed_avg: stats::mean(&pair.fixed_avgs),
            fixed_median: stats::median(&pair.fixed_medians),
        });
    }

    rows.sort_by(|x, y| {
        y.support_ab
            .cmp(&x.support_ab)
            .then_with(|| x.skill_a.cmp(&y.skill_a))
            .then_with(|| x.skill_b.cmp(&y.skill_b))
    });
    rows
}

pub fn to_table(rows: &[GlobalPairRow]) -> Table {
    Table {
        headers: HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.skill_a.clone(),
                    r.skill_b.clone(),
                    r.support_ab.to_string(),
                    r.support_a.to_string(),
                    r.support_b.to_string(),
                    fmt_num(r.confidence_ab),
                    fmt_num(r.confidence_ba),
                    fmt_num(r.lift),
                    fmt_num(r.jaccard),
                    r.hourly_jobs.to_string(),
                    r.fixed_jobs.to_string(),
                    fmt_opt(r.hourly_avg),
                    fmt_opt(r.hourly_median),
                    fmt_opt(r.fixed_avg),
                    fmt_opt(r.fixed_median),
                ]
            })
            .collect(),
    }
}
