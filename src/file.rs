// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::analysis::types::Table;
use crate::csv::{rows_to_string, Delim};

/// Write a finished table as one whole-file write. The contents are rendered
/// in memory first, so a failure mid-computation leaves no partial file that
/// could pass for valid output.
pub fn write_table(
    path: &Path,
    table: &Table,
    delim: Delim,
    include_headers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let headers = include_headers.then_some(table.headers.as_slice());
    let contents = rows_to_string(headers, &table.rows, delim);

    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

/// Resolve a user-supplied output hint against a default filename:
/// a directory (existing or trailing-slash hint) gets the default name
/// joined on; anything else is taken as the file path.
pub fn resolve_out_path(hint: &Path, default_filename: &str) -> PathBuf {
    if hint.is_dir() || looks_like_dir_hint(hint) {
        hint.join(default_filename)
    } else {
        hint.to_path_buf()
    }
}
