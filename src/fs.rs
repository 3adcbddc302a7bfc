//! File system utilities.

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Writes content atomically (temp file + rename) and restricts the file
/// to its owner on Unix.
///
/// The temp file is created next to the target so the rename stays on
/// one filesystem.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written, chmod-ed or renamed.
pub fn write_private(path: &Path, content: &str) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    let temp_path = parent.join(format!(".{file_name}.tmp"));

    fs::write(&temp_path, content)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&temp_path, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&temp_path, path)?;

    Ok(())
}
