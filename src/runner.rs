// src/runner.rs
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::{
    analysis::{global, segmented, verify::{self, VerifyReport}},
    file::{resolve_out_path, write_table},
    params::{Params, TaskKind, DEFAULT_OUT_DIR, GLOBAL_FILENAME, SEGMENTED_FILENAME},
    store::{self, Store},
};

/// Optional progress sink for the frontend.
/// CLI prints lines; tests usually pass None.
pub trait Progress {
    fn log(&mut self, _msg: &str) {}
    fn file_written(&mut self, _path: &Path) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what was produced.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    pub verify: Option<VerifyReport>,
}

/// Top-level runner: dispatch on task kind and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let input = params
        .input
        .as_deref()
        .ok_or("no input file given (--input <exploded-records table>)")?;

    let store = load_store(input, params, progress.as_deref_mut())?;

    let mut written = Vec::new();
    let mut report = None;

    match params.task {
        TaskKind::Segmented => {
            written.push(run_segmented(&store, params, progress.as_deref_mut())?);
        }
        TaskKind::Global => {
            written.push(run_global(&store, params, progress.as_deref_mut())?);
        }
        TaskKind::Verify => {
            let pairs_path = params
                .pairs_file
                .as_deref()
                .ok_or("--task verify needs --pairs <segmented pair table>")?;
            report = Some(run_verify(&store, pairs_path, params, progress.as_deref_mut())?);
        }
        TaskKind::All => {
            let seg_path = run_segmented(&store, params, progress.as_deref_mut())?;
            written.push(run_global(&store, params, progress.as_deref_mut())?);
            // Verify what actually landed on disk, not the in-memory rows.
            report = Some(run_verify(&store, &seg_path, params, progress.as_deref_mut())?);
            written.insert(0, seg_path);
        }
    }

    Ok(RunSummary { files_written: written, verify: report })
}

fn load_store(
    input: &Path,
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Store, Box<dyn Error>> {
    let store = Store::load(input, params.format)?;
    let msg = format!(
        "Loaded {} records from {} ({} rows read, {} dropped)",
        store.records.len(),
        input.display(),
        store.rows_read,
        store.rows_dropped,
    );
    logf!("{msg}");
    if let Some(p) = progress.as_deref_mut() {
        p.log(&msg);
    }
    Ok(store)
}

fn out_path(params: &Params, default_filename: &str) -> PathBuf {
    match &params.out {
        Some(hint) => resolve_out_path(hint, default_filename),
        None => PathBuf::from(DEFAULT_OUT_DIR).join(default_filename),
    }
}

fn run_segmented(
    store: &Store,
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<PathBuf, Box<dyn Error>> {
    let rows = segmented::analyze(&store.records);
    let table = segmented::to_table(&rows);
    let path = out_path(params, SEGMENTED_FILENAME);

    write_table(&path, &table, params.format, params.include_headers)?;
    logf!("Segmented analysis: {} pair rows -> {}", rows.len(), path.display());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Segmented analysis: {} pair rows", rows.len()));
        p.file_written(&path);
    }
    Ok(path)
}

fn run_global(
    store: &Store,
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<PathBuf, Box<dyn Error>> {
    let rows = global::analyze(&store.records);
    let table = global::to_table(&rows);
    let path = out_path(params, GLOBAL_FILENAME);

    write_table(&path, &table, params.format, params.include_headers)?;
    logf!("Global analysis: {} pair rows -> {}", rows.len(), path.display());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Global analysis: {} pair rows", rows.len()));
        p.file_written(&path);
    }
    Ok(path)
}

fn run_verify(
    store: &Store,
    pairs_path: &Path,
    params: &Params,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<VerifyReport, Box<dyn Error>> {
    let table = store::load_pair_table(pairs_path, params.format)?;
    let report = verify::verify(&store.records, &table, params.sample, params.seed);

    if report.is_clean() {
        logf!(
            "Verify {}: clean ({} rows, {} recomputed)",
            pairs_path.display(), report.rows_total, report.checked,
        );
    } else {
        loge!(
            "Verify {}: {} invariant violations, {} mismatches in {} checked rows",
            pairs_path.display(),
            report.invariant_violations, report.mismatch_count, report.checked,
        );
    }
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Verified {} of {} output rows against {} records",
            report.checked, report.rows_total, store.records.len(),
        ));
    }
    Ok(report)
}
