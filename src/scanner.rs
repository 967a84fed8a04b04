use crate::types::Measurement;
use anyhow::{Error, Result};
use indicatif::ProgressBar;
use std::path::Path;
use walkdir::WalkDir;

/// Sums the apparent size of everything below a root path
pub struct Sizer {
    recursive: bool,
    progress: Option<ProgressBar>,
}

impl Sizer {
    pub fn new(recursive: bool) -> Self {
        Self {
            recursive,
            progress: None,
        }
    }

    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Measure a file or directory.
    ///
    /// Directories never add bytes. Without recursion only the root's direct
    /// children are counted. The first access error aborts the whole walk.
    pub fn measure(&self, root: &Path) -> Result<Measurement> {
        let mut measurement = Measurement::new(root.to_path_buf());

        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| self.should_enter(e));

        for entry in walker {
            let entry = entry.map_err(|e| walk_error(e, root))?;

            if entry.file_type().is_dir() {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| walk_error(e, root))?;

            measurement.size = measurement.size.saturating_add(metadata.len());
            measurement.file_count += 1;

            if let Some(ref pb) = self.progress {
                pb.inc(1);
            }
        }

        Ok(measurement)
    }

    /// Only the root directory is entered unless recursion is on
    fn should_enter(&self, entry: &walkdir::DirEntry) -> bool {
        self.recursive || entry.depth() == 0 || !entry.file_type().is_dir()
    }
}

/// Name the failing entry and keep the bare io error as the source, since
/// walkdir's own message already embeds it.
fn walk_error(err: walkdir::Error, root: &Path) -> Error {
    let path = err.path().unwrap_or(root).to_path_buf();
    if err.io_error().is_none() {
        return Error::new(err).context(format!("Failed to walk {}", root.display()));
    }
    match err.into_io_error() {
        Some(io_err) => Error::new(io_err).context(format!("Failed to read {}", path.display())),
        None => unreachable!("io_error() was checked above"),
    }
}
