// File: src/export.rs
use crate::core::registry::{Registry, RegistryEntry};
use crate::error::{PratyaharaError, Result};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes the named registry as pretty JSON, atomically replacing `path`.
pub fn export_registry(registry: &Registry, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let entries: &[RegistryEntry] = registry.entries();

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| PratyaharaError::Io(e.error))?;
    tracing::info!(path = %path.display(), groups = entries.len(), "exported registry");
    Ok(())
}

/// Reads a custom alphabet: a JSON array of non-empty phoneme strings.
pub fn load_alphabet(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let alphabet: Vec<String> = serde_json::from_reader(reader)?;

    if alphabet.is_empty() || alphabet.iter().any(|p| p.trim().is_empty()) {
        return Err(PratyaharaError::InvalidInput);
    }
    tracing::debug!(path = %path.display(), len = alphabet.len(), "loaded custom alphabet");
    Ok(alphabet)
}
