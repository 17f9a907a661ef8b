//! Writing the canvas to PNG files.

use crate::config::OutputConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

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

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf> {
    if !directory.exists() {
        log::info!("Creating output directory: {}", directory.display());
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create {}", directory.display()))?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

/// Timestamped path inside the configured save directory.
pub fn default_output_path(config: &OutputConfig) -> Result<PathBuf> {
    let directory = ensure_directory_exists(&expand_tilde(&config.save_directory))?;
    Ok(directory.join(generate_filename(&config.filename_template, "png")))
}

/// Writes PNG bytes to `path`, readable and writable by the user only.
pub fn save_png(image_data: &[u8], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_directory_exists(parent)?;
    }

    log::info!(
        "Saving canvas to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(path, image_data).with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict permissions on {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("test_%Y%m%d", "png");
        assert!(filename.starts_with("test_"));
        assert!(filename.ends_with(".png"));
        assert_eq!(filename.len(), "test_YYYYMMDD.png".len());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn default_output_path_uses_template() {
        let temp = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            save_directory: temp.path().join("nested").display().to_string(),
            filename_template: "drawing".to_string(),
        };
        let path = default_output_path(&config).unwrap();
        assert_eq!(path.file_name().unwrap(), "drawing.png");
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn save_png_creates_parent_and_restricts_permissions() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("out").join("canvas.png");
        save_png(&[137, 80, 78, 71], &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), vec![137, 80, 78, 71]);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
