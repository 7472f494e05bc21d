use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Writes `contents` to `path`, creating missing parent directories first.
pub fn write_output_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "output written");
    Ok(())
}
