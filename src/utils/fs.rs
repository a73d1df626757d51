use std::fs;
use std::path::{Path, PathBuf};
use std::io::{Read, Write};

use walkdir::WalkDir;

use crate::utils::error::BoxResult;

/// Extensions treated as HTML pages
const HTML_EXTENSIONS: [&str; 2] = ["html", "htm"];

/// Check if a path looks like an HTML page
pub fn is_html_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| HTML_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write a string to a file, creating the file if it doesn't exist
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// List all HTML files below a directory, sorted for stable processing order
pub fn list_html_files<P: AsRef<Path>>(dir: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir.as_ref())
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_html_file(e.path()))
        .map(|e| e.into_path())
        .collect();

    files.sort();
    files
}
