// src/analysis/segmented.rs
// Support & Metric Calculator, segmented variant: per-(Category, Job Type,
// Experience Level) pair supports, confidence, lift, Jaccard and budget
// roll-ups.

use std::collections::BTreeMap;

use crate::core::stats;
use crate::store::ExplodedRecord;

use super::jobs;
use super::pairs::skill_pairs;
use super::types::{fmt_num, fmt_opt, LogicalJob, SegPairRow, SegmentKey, Table};

pub const HEADERS: [&str; 17] = [
    "Category", "Job Type", "Experience Level",
    "Skill A", "Skill B",
    "Jobs_Count", "Avg_Budget", "Median_Budget", "Min_Budget", "Max_Budget",
    "Support A", "Support B", "Support AB",
    "Confidence A→B", "Confidence B→A", "Lift", "Jaccard",
];

struct PairAcc {
    jobs: u64,
    budgets: Vec<f64>, // per-job budget_avg; one job, one vote
}

pub fn analyze(records: &[ExplodedRecord]) -> Vec<SegPairRow> {
    rows_from_jobs(&jobs::logical_jobs(records))
}

pub fn rows_from_jobs(jobs: &[LogicalJob]) -> Vec<SegPairRow> {
    // Supports and totals count every logical job in the segment, including
    // single-skill jobs that never produce a pair. Counting only pair-bearing
    // jobs would shrink the denominators and inflate confidence/lift.
    let mut seg_totals: BTreeMap<&SegmentKey, u64> = BTreeMap::new();
    let mut supports: BTreeMap<(&SegmentKey, &str), u64> = BTreeMap::new();
    let mut acc: BTreeMap<(&SegmentKey, &str, &str), PairAcc> = BTreeMap::new();

    for job in jobs {
        let seg = &job.key.segment;
        *seg_totals.entry(seg).or_insert(0) += 1;
        for skill in &job.skills {
            *supports.entry((seg, skill.as_str())).or_insert(0) += 1;
        }
        for (a, b) in skill_pairs(&job.skills) {
            let entry = acc
                .entry((seg, a, b))
                .or_insert_with(|| PairAcc { jobs: 0, budgets: Vec::new() });
            entry.jobs += 1;
            if let Some(budget) = job.budget_avg {
                entry.budgets.push(budget);
            }
        }
    }

    let mut rows = Vec::with_capacity(acc.len());
    for (&(seg, a, b), pair) in acc.iter() {
        let support_a = supports[&(seg, a)];
        let support_b = supports[&(seg, b)];
        let support_ab = pair.jobs;
        // A pair's segment always has jobs; an empty segment here means the
        // aggregation above is broken.
        let total = *seg_totals
            .get(seg)
            .expect("pair emitted for a segment with zero jobs");

        rows.push(SegPairRow {
            segment: seg.clone(),
            skill_a: a.to_string(),
            skill_b: b.to_string(),
            jobs_count: support_ab,
            avg_budget: stats::mean(&pair.budgets),
            median_budget: stats::median(&pair.budgets),
            min_budget: stats::min(&pair.budgets),
            max_budget: stats::max(&pair.budgets),
            support_a,
            support_b,
            support_ab,
            confidence_ab: support_ab as f64 / support_a as f64,
            confidence_ba: support_ab as f64 / support_b as f64,
            lift: (support_ab as f64 * total as f64) / (support_a as f64 * support_b as f64),
            jaccard: support_ab as f64 / (support_a + support_b - support_ab) as f64,
        });
    }

    // Jobs_Count descending; the rest of the key makes ties deterministic so
    // identical inputs give byte-identical files.
    rows.sort_by(|x, y| {
        y.jobs_count
            .cmp(&x.jobs_count)
            .then_with(|| x.segment.cmp(&y.segment))
            .then_with(|| x.skill_a.cmp(&y.skill_a))
            .then_with(|| x.skill_b.cmp(&y.skill_b))
    });
    rows
}

pub fn to_table(rows: &[SegPairRow]) -> Table {
    Table {
        headers: HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| {
                vec![
                    r.segment.category.clone(),
                    r.segment.job_type.clone(),
                    r.segment.experience.clone(),
                    r.skill_a.clone(),
                    r.skill_b.clone(),
                    r.jobs_count.to_string(),
                    fmt_opt(r.avg_budget),
                    fmt_opt(r.median_budget),
                    fmt_opt(r.min_budget),
                    fmt_opt(r.max_budget),
                    r.support_a.to_string(),
                    r.support_b.to_string(),
                    r.support_ab.to_string(),
                    fmt_num(r.confidence_ab),
                    fmt_num(r.confidence_ba),
                    fmt_num(r.lift),
                    fmt_num(r.jaccard),
                ]
            })
            .collect(),
    }
}
