use std::path::{Path, PathBuf};

use anyhow::Context;
use hermes_simplify::{EdgeRecord, io::read_records_from_path};
use tracing::{debug, info};

const EDGE_FILE_EXTENSIONS: [&str; 3] = ["geojson", "json", "csv"];

/// Edge files of a folder and its subfolders, sorted by path.
pub fn read_folder(folder_path: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder_path)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_edge_file(&path) {
            files.push(path);
        } else if path.is_dir() {
            files.extend(read_folder(&path)?);
        }
    }

    files.sort();

    Ok(files)
}

fn is_edge_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            EDGE_FILE_EXTENSIONS
                .iter()
                .any(|known| extension.eq_ignore_ascii_case(known))
        })
}

/// Records of a single edge file, or of every edge file of a folder.
pub fn read_records(input: &Path) -> Result<Vec<EdgeRecord>, anyhow::Error> {
    let paths = if input.is_dir() {
        read_folder(input)?
    } else {
        vec![input.to_path_buf()]
    };

    let mut records = Vec::new();
    for path in &paths {
        let file_records = read_records_from_path(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        debug!(path = %path.display(), records = file_records.len(), "read edge file");
        records.extend(file_records);
    }

    info!(files = paths.len(), records = records.len(), "read edges");

    Ok(records)
}
