// utils crate

use std::io;
use std::path::{Path, PathBuf};

pub const FORM_DOCUMENT_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

pub fn is_form_document_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| FORM_DOCUMENT_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Expands `path` into the form documents it names: the file itself, or the
/// document files directly inside a directory, sorted by path.
pub fn collect_form_documents(path: &Path) -> io::Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if !path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Path does not exist: {}", path.display()),
        ));
    }

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let entry_path = entry?.path();
        if entry_path.is_file() && is_form_document_file(&entry_path) {
            documents.push(entry_path);
        }
    }
    documents.sort();

    Ok(documents)
}
