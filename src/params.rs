// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

pub const DEFAULT_OUT_DIR: &str = "out";
pub const SEGMENTED_FILENAME: &str = "skill_pairs_segmented.csv";
pub const GLOBAL_FILENAME: &str = "skill_pairs_global.csv";

pub const DEFAULT_SAMPLE: usize = 20;
pub const DEFAULT_SEED: u64 = 42;

/// How many mismatch detail records the verifier report keeps.
pub const MISMATCH_DETAIL_CAP: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskKind {
    Segmented,
    Global,
    Verify,
    All,
}

#[derive(Clone)]
pub struct Params {
    pub task: TaskKind,              // which analysis to run
    pub input: Option<PathBuf>,      // exploded-records table (required)
    pub out: Option<PathBuf>,        // output path (dir, or file for single-output tasks)
    pub pairs_file: Option<PathBuf>, // segmented table to verify (--task verify)
    pub format: Delim,
    pub include_headers: bool,       // header line on output tables
    pub sample: usize,               // verifier detail-sample size; 0 = full table
    pub seed: u64,                   // verifier sampling seed
}

impl Params {
    pub fn new() -> Self {
        Self {
            task: TaskKind::All,
            input: None,
            out: None,
            pairs_file: None,
            format: Delim::Csv,
            include_headers: true,
            sample: DEFAULT_SAMPLE,
            seed: DEFAULT_SEED,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
