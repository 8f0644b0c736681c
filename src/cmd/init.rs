use anyhow::{bail, Result};
use calpick::data::{DatepickerOptions, Persistable};
use std::path::Path;

pub fn run(dir: &Path, force: bool) -> Result<()> {
    let path = run_in_dir(dir, force)?;
    println!("Wrote default options to {}", path.display());
    Ok(())
}

/// Writes the default options file into `dir`. Refuses to overwrite unless `force`.
pub(crate) fn run_in_dir(dir: &Path, force: bool) -> Result<std::path::PathBuf> {
    let path = DatepickerOptions::path_in(dir);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    DatepickerOptions::with_defaults().save_to(dir)?;
    Ok(path)
}
