//! Writing rendered diagrams to disk.

use crate::canvas::{Canvas, CanvasError};
use crate::config::OutputConfig;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while saving a diagram.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Resolves the output path when none was given on the command line.
pub fn default_output_path(config: &OutputConfig) -> PathBuf {
    config
        .directory
        .join(generate_filename(&config.filename_template, "png"))
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
fn ensure_parent_exists(path: &Path) -> Result<(), OutputError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|source| OutputError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Encodes `canvas` as PNG and writes it to `path`.
///
/// # Returns
/// The path written to
pub fn save_png(canvas: &Canvas<'_>, path: &Path) -> Result<PathBuf, OutputError> {
    ensure_parent_exists(path)?;

    let bytes = canvas.to_png_bytes()?;

    log::info!("Saving diagram to: {} ({} bytes)", path.display(), bytes.len());

    fs::write(path, &bytes).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::PocketImages;
    use crate::config::TableConfig;
    use tempfile::TempDir;

    #[test]
    fn generated_filename_has_extension_and_no_specifiers() {
        let name = generate_filename("snooker_%Y-%m-%d", "png");
        assert!(name.starts_with("snooker_"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains('%'));
    }

    #[test]
    fn default_output_path_uses_directory() {
        let config = OutputConfig {
            directory: PathBuf::from("renders"),
            filename_template: "table".to_string(),
        };
        assert_eq!(default_output_path(&config), PathBuf::from("renders/table.png"));
    }

    #[test]
    fn save_png_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("table.png");
        let config = TableConfig::default();
        let canvas = Canvas::new(&config, &PocketImages::default()).unwrap();

        let written = save_png(&canvas, &path).unwrap();
        assert_eq!(written, path);
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
