// src/store.rs
use std::{error::Error, fs, path::Path};

use crate::analysis::types::{SegmentKey, StoredPair};
use crate::core::sanitize::{clean, is_blank, parse_numeric};
use crate::csv::{self, Delim};

/// One row of the exploded input: (job posting, single skill, segment context).
#[derive(Clone, Debug)]
pub struct ExplodedRecord {
    pub job_id: String,
    pub skill: String,
    pub category: String,
    pub job_type: String,
    pub experience: String,
    pub budget_avg: Option<f64>,
    pub country: String,
    pub date: String,
}

/// The canonical fact table every analysis consumes, plus row accounting.
/// Rows missing Job ID or Skill are dropped here and only counted.
#[derive(Debug)]
pub struct Store {
    pub records: Vec<ExplodedRecord>,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn required(map: &std::collections::HashMap<String, usize>, name: &str) -> Result<usize, Box<dyn Error>> {
    map.get(name)
        .copied()
        .ok_or_else(|| format!("missing column: {name}").into())
}

impl Store {
    pub fn load(path: &Path, delim: Delim) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("read {}: {e}", path.display()))?;
        Self::from_text(&text, delim)
    }

    pub fn from_text(text: &str, delim: Delim) -> Result<Self, Box<dyn Error>> {
        let (headers, data) = csv::split_headers(csv::parse_rows(text, delim));
        if headers.is_empty() {
            return Err("input has no header row".into());
        }
        let map = csv::header_map(&headers);

        let c_job = required(&map, "Job ID")?;
        let c_skill = required(&map, "Skill")?;
        let c_cat = required(&map, "Category")?;
        let c_type = required(&map, "Job Type")?;
        let c_exp = required(&map, "Experience Level")?;
        let c_budget = required(&map, "Budget Avg")?;
        // Present in full exports, but nothing downstream requires them.
        let c_country = map.get("Country Normalized").copied();
        let c_date = map.get("Absolute Date").copied();

        let mut records = Vec::with_capacity(data.len());
        let mut dropped = 0usize;

        for row in &data {
            let job_id = cell(row, c_job);
            let skill = cell(row, c_skill);
            if is_blank(job_id) || is_blank(skill) {
                dropped += 1;
                continue;
            }
            records.push(ExplodedRecord {
                job_id: clean(job_id),
                skill: clean(skill),
                category: clean(cell(row, c_cat)),
                job_type: clean(cell(row, c_type)),
                experience: clean(cell(row, c_exp)),
                budget_avg: parse_numeric(cell(row, c_budget)),
                country: c_country.map(|i| clean(cell(row, i))).unwrap_or_default(),
                date: c_date.map(|i| clean(cell(row, i))).unwrap_or_default(),
            });
        }

        Ok(Store { records, rows_read: data.len(), rows_dropped: dropped })
    }
}

/// Reload a produced segmented pair table so the verifier can cross-check it
/// without sharing any state with the calculator that wrote it.
pub fn load_pair_table(path: &Path, delim: Delim) -> Result<Vec<StoredPair>, Box<dyn Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("read {}: {e}", path.display()))?;
    parse_pair_table(&text, delim)
}

pub fn parse_pair_table(text: &str, delim: Delim) -> Result<Vec<StoredPair>, Box<dyn Error>> {
    let (headers, data) = csv::split_headers(csv::parse_rows(text, delim));
    if headers.is_empty() {
        return Err("pair table has no header row".into());
    }
    let map = csv::header_map(&headers);

    let c_cat = required(&map, "Category")?;
    let c_type = required(&map, "Job Type")?;
    let c_exp = required(&map, "Experience Level")?;
    let c_a = required(&map, "Skill A")?;
    let c_b = required(&map, "Skill B")?;
    let c_jobs = required(&map, "Jobs_Count")?;
    let c_sa = required(&map, "Support A")?;
    let c_sb = required(&map, "Support B")?;
    let c_sab = required(&map, "Support AB")?;

    let count = |row: &[String], idx: usize, line: usize, name: &str| -> Result<u64, Box<dyn Error>> {
        cell(row, idx)
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("row {line}: bad {name}: {:?}", cell(row, idx)).into())
    };

    let mut out = Vec::with_capacity(data.len());
    for (i, row) in data.iter().enumerate() {
        let line = i + 2; // 1-based, after the header
        out.push(StoredPair {
            segment: SegmentKey::new(cell(row, c_cat), cell(row, c_type), cell(row, c_exp)),
            skill_a: clean(cell(row, c_a)),
            skill_b: clean(cell(row, c_b)),
            jobs_count: count(row, c_jobs, line, "Jobs_Count")?,
            support_a: count(row, c_sa, line, "Support A")?,
            support_b: count(row, c_sb, line, "Support B")?,
            support_ab: count(row, c_sab, line, "Support AB")?,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
 Job ID ,Category,Job Type,Experience Level,Budget Avg,Country Normalized,Absolute Date,Skill
j1,Web,Hourly,Expert,25.0,Germany,2024-01-02,rust
j1,Web,Hourly,Expert,25.0,Germany,2024-01-02,sql
,Web,Hourly,Expert,10.0,Germany,2024-01-02,orphan
j2,Web,Hourly,Expert,not-a-number,Germany,2024-01-02,  rust
j3,Web,Hourly,Expert,,Germany,2024-01-02,
";

    #[test]
    fn loads_and_filters_records() {
        let store = Store::from_text(INPUT, Delim::Csv).unwrap();
        assert_eq!(store.rows_read, 5);
        assert_eq!(store.rows_dropped, 2); // blank job id, blank skill
        assert_eq!(store.records.len(), 3);

        let r = &store.records[2];
        assert_eq!(r.job_id, "j2");
        assert_eq!(r.skill, "rust"); // trimmed
        assert_eq!(r.budget_avg, None); // malformed, not zero
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let err = Store::from_text("Job ID,Skill\nj1,rust\n", Delim::Csv).unwrap_err();
        assert!(err.to_string().contains("missing column: Category"));
    }

    #[test]
    fn pair_table_counts_parse_strictly() {
        let text = "\
Category,Job Type,Experience Level,Skill A,Skill B,Jobs_Count,Support A,Support B,Support AB
Web,Hourly,Expert,rust,sql,3,5,4,3
";
        let rows = parse_pair_table(text, Delim::Csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].support_a, 5);
        assert_eq!(rows[0].jobs_count, 3);

        let bad = text.replace(",3,5,", ",x,5,");
        let err = parse_pair_table(&bad, Delim::Csv).unwrap_err();
        assert!(err.to_string().contains("bad Jobs_Count"));
    }
}
