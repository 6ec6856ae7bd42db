// src/analysis/verify.rs
// Consistency Verifier: recompute supports for a sample of output rows
// straight from the exploded records and cross-check the stored values.
// Reports defects; never repairs them.

use std::collections::BTreeSet;

use crate::params::MISMATCH_DETAIL_CAP;
use crate::store::ExplodedRecord;

use super::types::{SegmentKey, StoredPair};

/// Supports recomputed independently of the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Supports {
    pub a: u64,
    pub b: u64,
    pub ab: u64,
}

/// One row whose stored counts disagree with the recomputation.
#[derive(Clone, Debug)]
pub struct Mismatch {
    pub stored: StoredPair,
    pub computed: Supports,
}

#[derive(Clone, Debug)]
pub struct VerifyReport {
    pub rows_total: usize,
    /// Rows anywhere in the table with support_ab > support_a or > support_b.
    pub invariant_violations: usize,
    /// Rows recomputed in detail.
    pub checked: usize,
    pub mismatch_count: usize,
    /// First few mismatches, capped at MISMATCH_DETAIL_CAP.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.invariant_violations == 0 && self.mismatch_count == 0
    }
}

/// Check a produced segmented table against the exploded-record population.
/// `sample` rows are recomputed in detail (0 = every row); the basic
/// support_ab ≤ support_a/b invariant is checked on the whole table.
pub fn verify(
    records: &[ExplodedRecord],
    table: &[StoredPair],
    sample: usize,
    seed: u64,
) -> VerifyReport {
    let invariant_violations = table
        .iter()
        .filter(|r| r.support_ab > r.support_a || r.support_ab > r.support_b)
        .count();

    let picked = sample_indices(table.len(), sample, seed);
    let mut mismatch_count = 0usize;
    let mut mismatches = Vec::new();

    for &i in &picked {
        let row = &table[i];
        let computed = recompute(records, &row.segment, &row.skill_a, &row.skill_b);
        let ok = computed.a == row.support_a
            && computed.b == row.support_b
            && computed.ab == row.support_ab
            && row.jobs_count == row.support_ab;
        if !ok {
            mismatch_count += 1;
            if mismatches.len() < MISMATCH_DETAIL_CAP {
                mismatches.push(Mismatch { stored: row.clone(), computed });
            }
        }
    }

    VerifyReport {
        rows_total: table.len(),
        invariant_violations,
        checked: picked.len(),
        mismatch_count,
        mismatches,
    }
}

/// Restrict the raw records to the row's segment, collect the distinct job-id
/// sets containing each skill, and intersect. Duplicate raw rows collapse via
/// the sets, so this matches the calculator's distinct-logical-job counting
/// without sharing any of its intermediates.
pub fn recompute(
    records: &[ExplodedRecord],
    segment: &SegmentKey,
    skill_a: &str,
    skill_b: &str,
) -> Supports {
    let mut jobs_a: BTreeSet<&str> = BTreeSet::new();
    let mut jobs_b: BTreeSet<&str> = BTreeSet::new();

    for r in records {
        if r.category != segment.category
            || r.job_type != segment.job_type
            || r.experience != segment.experience
        {
            continue;
        }
        if r.skill == skill_a {
            jobs_a.insert(r.job_id.as_str());
        }
        if r.skill == skill_b {
            jobs_b.insert(r.job_id.as_str());
        }
    }

    let ab = jobs_a.intersection(&jobs_b).count() as u64;
    Supports { a: jobs_a.len() as u64, b: jobs_b.len() as u64, ab }
}

/* ---------------- Sampling ---------------- */

fn xorshift(state: &mut u64) -> u64 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *state = x;
    x
}

/// Deterministic sample of row indices: partial Fisher–Yates over a seeded
/// xorshift. `sample == 0` or `sample >= len` selects every row.
fn sample_indices(len: usize, sample: usize, seed: u64) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..len).collect();
    if sample == 0 || sample >= len {
        return idx;
    }
    // never seed xorshift with zero
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1);
    for i in 0..sample {
        let j = i + (xorshift(&mut state) as usize) % (len - i);
        idx.swap(i, j);
    }
    idx.truncate(sample);
    idx
}
