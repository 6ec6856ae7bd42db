// src/analysis/mod.rs
//! # Co-occurrence analysis module
//!
//! Everything downstream of the exploded-record store lives here, in strict
//! dependency order:
//!
//! ```text
//! store → jobs (aggregate) → pairs (generate) → segmented/global (metrics)
//!                                      verify reads store + output, nothing else
//! ```
//!
//! ## Conventions & invariants
//! - Logical jobs group on the **full** `(Job ID, Category, Job Type,
//!   Experience Level)` tuple, never on Job ID alone. A posting that shows up
//!   under inconsistent segment labels is analyzed as distinct jobs — that is
//!   a policy, not a bug to fix here.
//! - Skill sets are distinct and sorted, so `(skills[i], skills[j])` with
//!   `i < j` is already the canonical pair form; `(B,A)` never appears.
//! - Supports and segment totals count **every** logical job, including
//!   single-skill jobs that never contribute a pair. Pair-bearing jobs alone
//!   would inflate confidence and lift; `verify` exists to catch exactly that
//!   class of denominator bug.
//! - All intermediate maps are `BTreeMap`s built in one pass and handed to the
//!   next stage by reference; no stage mutates a predecessor's output, and
//!   repeated runs produce byte-identical tables.

pub mod types;

pub mod jobs;
pub mod pairs;

pub mod global;
pub mod segmented;
pub mod verify;
