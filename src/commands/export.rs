//! Export the entity tables as JSON files

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Dataset, Result};

use super::common::to_json;

/// Write a string to file, creating parent directories as needed.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Write one `<table>.json` per table into `dir`. Returns the written paths
/// in table order.
pub fn export_tables(data: &Dataset<'_>, dir: &Path) -> Result<Vec<PathBuf>> {
    let tables = [
        ("leagues", to_json(data.leagues())?),
        ("teams", to_json(data.teams())?),
        ("players", to_json(data.players())?),
        ("matches", to_json(data.matches())?),
        ("match_events", to_json(data.events())?),
        ("injury_reports", to_json(data.injuries())?),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (name, json) in tables {
        let path = dir.join(format!("{}.json", name));
        write_string(&path, &json)?;
        log::debug!("wrote {} ({} bytes)", path.display(), json.len());
        written.push(path);
    }

    Ok(written)
}

pub fn handle_export(out: &Path, verbose: bool) -> Result<()> {
    let written = export_tables(&Dataset::embedded(), out)?;

    println!("✓ Exported {} tables to {}", written.len(), out.display());
    if verbose {
        for path in &written {
            println!("  {}", path.display());
        }
    }

    Ok(())
}
