/// Filesystem helpers shared by the job.
pub mod fs {
    use std::fs;
    use std::io;

    use camino::Utf8Path;

    /// Ensure a directory exists, creating missing parents as needed.
    ///
    /// Returns `true` when the directory was created by this call. A regular file
    /// occupying `path` is not a directory, so creation is attempted and fails.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path)?;
        Ok(true)
    }

}
