// tests/pipeline_e2e.rs
use std::fs;
use std::path::PathBuf;

use skillstats::csv::Delim;
use skillstats::params::{Params, TaskKind};
use skillstats::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("skillstats_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

// Padded headers, a junk row, a malformed budget, and a cross-segment job id.
const INPUT: &str = "\
 Job ID ,Category,Job Type,Experience Level, Budget Avg ,Country Normalized,Absolute Date,Skill
j1,Web,Hourly,Expert,25.0,Germany,2024-01-02,rust
j1,Web,Hourly,Expert,25.0,Germany,2024-01-02,sql
j2,Web,Hourly,Expert,40.0,France,2024-01-03,rust
j2,Web,Hourly,Expert,40.0,France,2024-01-03,sql
j2,Web,Hourly,Expert,40.0,France,2024-01-03,docker
j3,Web,Hourly,Expert,oops,Spain,2024-01-04,rust
j4,Data,Fixed,Entry,500,Spain,2024-01-05,python
j4,Data,Fixed,Entry,500,Spain,2024-01-05,excel
j4,Web,Hourly,Expert,30.0,Spain,2024-01-05,rust
,Web,Hourly,Expert,10.0,Nowhere,2024-01-06,ghost
";

fn params_for(dir: &PathBuf, task: TaskKind) -> Params {
    let input = dir.join("exploded.csv");
    fs::write(&input, INPUT).unwrap();
    let mut params = Params::new();
    params.task = task;
    params.input = Some(input);
    params.out = Some(dir.join("out/"));
    params
}

#[test]
fn full_run_writes_both_tables_and_verifies_clean() {
    let dir = tmp_dir("all");
    let params = params_for(&dir, TaskKind::All);

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.files_written.len(), 2);
    for p in &summary.files_written {
        assert!(p.exists(), "missing output: {}", p.display());
    }

    let report = summary.verify.unwrap();
    assert!(report.is_clean());
    assert!(report.rows_total > 0);

    // header line survives the round trip exactly
    let seg_text = fs::read_to_string(&summary.files_written[0]).unwrap();
    let first_line = seg_text.lines().next().unwrap();
    assert!(first_line.starts_with("Category,Job Type,Experience Level,Skill A,Skill B,Jobs_Count"));
    assert!(first_line.ends_with("Confidence A→B,Confidence B→A,Lift,Jaccard"));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let dir_a = tmp_dir("idem_a");
    let dir_b = tmp_dir("idem_b");

    let sum_a = runner::run(&params_for(&dir_a, TaskKind::All), None).unwrap();
    let sum_b = runner::run(&params_for(&dir_b, TaskKind::All), None).unwrap();

    for (pa, pb) in sum_a.files_written.iter().zip(&sum_b.files_written) {
        let a = fs::read(pa).unwrap();
        let b = fs::read(pb).unwrap();
        assert_eq!(a, b, "{} differs between runs", pa.display());
    }
}

#[test]
fn segmented_task_respects_an_explicit_file_path() {
    let dir = tmp_dir("single");
    let mut params = params_for(&dir, TaskKind::Segmented);
    params.out = Some(dir.join("pairs.csv"));

    let summary = runner::run(&params, None).unwrap();
    assert_eq!(summary.files_written.len(), 1);
    assert!(summary.files_written[0].ends_with("pairs.csv"));
    assert!(summary.verify.is_none());

    // j1 and j2 share {rust, sql}; j3/j4 widen rust's support to 4
    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    let top = text.lines().nth(1).unwrap();
    assert!(top.starts_with("Web,Hourly,Expert,rust,sql,2"));
    let cells: Vec<&str> = top.split(',').collect();
    assert_eq!(cells[10], "4"); // Support A (rust)
    assert_eq!(cells[11], "2"); // Support B (sql)
    assert_eq!(cells[12], "2"); // Support AB
}

#[test]
fn verify_task_reads_a_produced_table_back() {
    let dir = tmp_dir("verify");
    let seg = params_for(&dir, TaskKind::Segmented);
    let produced = runner::run(&seg, None).unwrap().files_written.remove(0);

    let mut check = seg.clone();
    check.task = TaskKind::Verify;
    check.pairs_file = Some(produced);
    check.sample = 0;

    let summary = runner::run(&check, None).unwrap();
    let report = summary.verify.unwrap();
    assert!(report.is_clean());
    assert_eq!(report.checked, report.rows_total);
    assert!(summary.files_written.is_empty());
}

#[test]
fn corrupted_table_is_reported_not_repaired() {
    let dir = tmp_dir("corrupt");
    let seg = params_for(&dir, TaskKind::Segmented);
    let produced = runner::run(&seg, None).unwrap().files_written.remove(0);

    // inflate the first data row's Support AB (column 13 of 17)
    let text = fs::read_to_string(&produced).unwrap();
    let mut lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();
    let mut cells: Vec<String> = lines[1].split(',').map(|c| c.to_string()).collect();
    cells[12] = "99".into();
    lines[1] = cells.join(",");
    fs::write(&produced, lines.join("\n")).unwrap();

    let mut check = seg.clone();
    check.task = TaskKind::Verify;
    check.pairs_file = Some(produced.clone());
    check.sample = 0;

    let report = runner::run(&check, None).unwrap().verify.unwrap();
    assert!(!report.is_clean());
    assert!(report.invariant_violations >= 1);
    assert!(report.mismatch_count >= 1);

    // the verifier only reports; the file still holds the corrupt value
    assert!(fs::read_to_string(&produced).unwrap().contains("99"));
}

#[test]
fn tsv_round_trip() {
    let dir = tmp_dir("tsv");
    let input = dir.join("exploded.tsv");
    fs::write(&input, INPUT.replace(',', "\t")).unwrap();

    let mut params = Params::new();
    params.task = TaskKind::Global;
    params.input = Some(input);
    params.out = Some(dir.join("out/"));
    params.format = Delim::Tsv;

    let summary = runner::run(&params, None).unwrap();
    let text = fs::read_to_string(&summary.files_written[0]).unwrap();
    assert!(text.lines().next().unwrap().starts_with("Skill A\tSkill B\tSupport AB"));
}
