// src/main.rs
use color_eyre::eyre::eyre;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    skillstats::cli::run().map_err(|e| eyre!("{e}"))
}
