// benches/pairs.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use skillstats::analysis::{global, jobs, segmented};
use skillstats::store::ExplodedRecord;

const SKILLS: [&str; 12] = [
    "rust", "python", "sql", "excel", "react", "figma",
    "seo", "docker", "aws", "go", "node", "wordpress",
];
const SEGMENTS: [(&str, &str, &str); 4] = [
    ("Web", "Hourly", "Expert"),
    ("Web", "Fixed", "Intermediate"),
    ("Data", "Hourly", "Entry"),
    ("Design", "Fixed", "Expert"),
];

/// Deterministic synthetic export: job k gets 2..=5 skills spread over the
/// skill list, one segment, and a budget on three rows out of four.
fn synthetic_records(jobs_n: usize) -> Vec<ExplodedRecord> {
    let mut out = Vec::new();
    for k in 0..jobs_n {
        let seg = SEGMENTS[k % SEGMENTS.len()];
        let n_skills = 2 + k % 4;
        for s in 0..n_skills {
            let skill = SKILLS[(k * 7 + s * 3) % SKILLS.len()];
            out.push(ExplodedRecord {
                job_id: format!("job-{k}"),
                skill: skill.into(),
                category: seg.0.into(),
                job_type: seg.1.into(),
                experience: seg.2.into(),
                budget_avg: (k % 4 != 0).then(|| 15.0 + (k % 50) as f64),
                country: String::new(),
                date: String::new(),
            });
        }
    }
    out
}

fn bench_analysis(c: &mut Criterion) {
    let records = synthetic_records(2_000);

    c.bench_function("logical_jobs_2k", |b| {
        b.iter(|| jobs::logical_jobs(black_box(&records)).len())
    });

    c.bench_function("segmented_2k", |b| {
        b.iter(|| segmented::analyze(black_box(&records)).len())
    });

    c.bench_function("global_2k", |b| {
        b.iter(|| global::analyze(black_box(&records)).len())
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
