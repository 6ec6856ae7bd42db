// src/analysis/pairs.rs
// Pair Generator: all unordered skill pairs of one logical job.

/// Every unordered pair of distinct skills, each exactly once.
///
/// `skills` must be distinct and sorted (as produced by the job aggregator),
/// which makes `(skills[i], skills[j])` with `i < j` the canonical form —
/// the reversed pair can never be emitted. Fewer than two skills yields
/// nothing.
pub fn skill_pairs(skills: &[String]) -> Vec<(&str, &str)> {
    let n = skills.len();
    if n < 2 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n - 1 {
        for j in i + 1..n {
            out.push((skills[i].as_str(), skills[j].as_str()));
        }
    }
    out
}
