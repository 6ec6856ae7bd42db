// src/cli.rs
use std::{env, path::Path, path::PathBuf};

use crate::analysis::verify::VerifyReport;
use crate::csv::Delim;
use crate::file::normalize_separators;
use crate::params::{Params, TaskKind};
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, Some(&mut progress))?;

    if let Some(report) = &summary.verify {
        print_report(report);
        if !report.is_clean() {
            return Err(format!(
                "verification failed: {} invariant violations, {} mismatched rows",
                report.invariant_violations, report.mismatch_count,
            )
            .into());
        }
    }
    Ok(())
}

struct ConsoleProgress;
impl runner::Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn file_written(&mut self, path: &Path) {
        println!("Wrote {}", path.display());
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--task" => {
                let v = args.next().ok_or("Missing value for --task")?;
                params.task = match v.to_ascii_lowercase().as_str() {
                    "segmented" => TaskKind::Segmented,
                    "global" => TaskKind::Global,
                    "verify" => TaskKind::Verify,
                    "all" => TaskKind::All,
                    other => return Err(format!("Unknown task: {}", other).into()),
                };}
            "-i" | "--input" => {
                let v = args.next().ok_or("Missing input path")?;
                params.input = Some(PathBuf::from(normalize_separators(&v)));}
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.out = Some(PathBuf::from(normalize_separators(&v)));}
            "--pairs" => {
                let v = args.next().ok_or("Missing value for --pairs")?;
                params.pairs_file = Some(PathBuf::from(normalize_separators(&v)));}
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--no-headers" => params.include_headers = false,
            "--sample" => {
                params.sample = args.next().ok_or("Missing value for --sample")?.parse()?;}
            "--seed" => {
                params.seed = args.next().ok_or("Missing value for --seed")?.parse()?;}
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

fn print_report(report: &VerifyReport) {
    println!(
        "Checked {} of {} output rows.",
        report.checked, report.rows_total
    );
    println!(
        "Invariant violations (Support AB > Support A/B): {}",
        report.invariant_violations
    );
    println!("Mismatches found: {}", report.mismatch_count);

    if !report.mismatches.is_empty() {
        println!("First few mismatches:");
        for m in &report.mismatches {
            let s = &m.stored;
            println!(
                "  [{} / {} / {}] {} + {}: stored A/B/AB = {}/{}/{}, recomputed = {}/{}/{}, Jobs_Count = {}",
                s.segment.category, s.segment.job_type, s.segment.experience,
                s.skill_a, s.skill_b,
                s.support_a, s.support_b, s.support_ab,
                m.computed.a, m.computed.b, m.computed.ab,
                s.jobs_count,
            );
        }
    }
}
