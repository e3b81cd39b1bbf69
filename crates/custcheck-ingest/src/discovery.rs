//! Input file discovery.

use std::path::{Component, Path, PathBuf};

use custcheck_model::ProvenanceDate;
use tracing::warn;

use crate::error::{IngestError, Result};

/// A CSV file found under the input root, with its folder-derived date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSource {
    pub path: PathBuf,
    pub date: ProvenanceDate,
}

/// Lists all CSV files under a directory, descending into subdirectories.
///
/// Returns files sorted by full path. Symlinked directories are not
/// followed.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let entries = std::fs::read_dir(&current).map_err(|e| IngestError::DirectoryRead {
            path: current.clone(),
            source: e,
        })?;

        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: current.clone(),
                source: e,
            })?;

            let path = entry.path();
            let is_real_dir = entry.file_type().is_ok_and(|t| t.is_dir());

            if is_real_dir {
                pending.push(path);
                continue;
            }

            if path.is_file() && has_csv_extension(&path) {
                files.push(path);
            }
        }
    }

    files.sort();

    Ok(files)
}

/// Checks for a `.csv` extension (case-insensitive).
fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Derives the provenance date from the three folders enclosing `file`.
///
/// Layout is `.../<year>/<month>/<day>/<file>.csv`. Folder names are used
/// verbatim; a missing ancestor gives an empty component. Symlinks are not
/// resolved, so a linked file takes its date from the folders it was found in.
pub fn provenance_date(file: &Path) -> ProvenanceDate {
    let resolved = lexical_absolute(file);
    let mut names = resolved.ancestors().skip(1).map(folder_name);

    let day = names.next().flatten();
    let month = names.next().flatten();
    let year = names.next().flatten();

    if day.is_none() || month.is_none() || year.is_none() {
        warn!(
            path = %file.display(),
            "file is not nested under year/month/day folders"
        );
    }

    ProvenanceDate::new(
        year.unwrap_or_default(),
        month.unwrap_or_default(),
        day.unwrap_or_default(),
    )
}

/// Makes `path` absolute and drops `.`/`..` components without touching the
/// filesystem.
fn lexical_absolute(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn folder_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Lists every CSV file under `dir` together with its provenance date.
pub fn discover_sources(dir: &Path) -> Result<Vec<CsvSource>> {
    let files = list_csv_files(dir)?;
    Ok(files
        .into_iter()
        .map(|path| {
            let date = provenance_date(&path);
            CsvSource { path, date }
        })
        .collect())
}
