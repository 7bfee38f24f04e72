//! Writing the assembled output.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{GignrError, Result};

/// File name of the generated output.
pub const OUTPUT_FILE_NAME: &str = ".gitignore";

/// Write `content` to `path`, truncating any existing file.
///
/// On Unix the file ends up `rw-r--r--`. The write is not atomic: there is no
/// temp-file-then-rename step.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    write_file(path, content).map_err(|e| GignrError::WriteFailure {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(content.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o644))?;
    }

    Ok(())
}
