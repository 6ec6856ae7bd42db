// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod analysis;
pub mod cli;
pub mod core;

pub mod csv;
pub mod file;
pub mod params;
pub mod runner;
pub mod store;
