//! File I/O utilities with atomic writes
//!
//! Class files are written to a temporary sibling first and renamed into
//! place, so a crash mid-write never leaves a truncated class file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::SbError;

const INDENT: &[u8] = b"    ";

/// Serialize `data` as indented JSON
///
/// Output is deterministic for a given value: struct fields keep their
/// declaration order and objects keep their insertion order.
pub fn to_pretty_json<T: Serialize>(data: &T) -> Result<Vec<u8>, SbError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)
        .map_err(|e| SbError::Storage(format!("Failed to serialize data: {}", e)))?;
    Ok(buf)
}

/// Temp file used while writing `path`
pub fn temp_path_for(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The parent directory must already exist.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SbError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let bytes = to_pretty_json(data)?;

    // Same directory as the target, so the rename cannot cross file systems
    let temp_path = temp_path_for(path);

    let file = File::create(&temp_path).map_err(|e| {
        SbError::Io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let mut writer = BufWriter::new(file);
    let written = writer
        .write_all(&bytes)
        .and_then(|_| writer.flush())
        .and_then(|_| writer.get_ref().sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(SbError::Io(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SbError::Io(format!("Failed to rename temp file to {}: {}", path.display(), e))
    })?;

    Ok(())
}
