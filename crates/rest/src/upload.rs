//! Staging uploaded files on disk.
//!
//! The engine imports files by path, so an uploaded part is written into a
//! fresh temporary directory for the duration of one collaborator call. The
//! directory and everything in it is removed when the [`TempUpload`] drops,
//! including while unwinding.

use std::io;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempDir};
use tracing::debug;

use crate::args::UploadedFile;

/// An uploaded file saved inside its own temporary directory.
#[derive(Debug)]
pub struct TempUpload {
    dir: TempDir,
    path: PathBuf,
}

impl TempUpload {
    /// Saves `file` into a new temporary directory under `parent`, or under
    /// the system temp dir when `parent` is `None`.
    ///
    /// The file keeps the client's filename without any directory part, or
    /// `fallback` when the client sent none.
    pub async fn save(
        file: &UploadedFile,
        fallback: &str,
        parent: Option<&Path>,
    ) -> io::Result<Self> {
        let builder = {
            let mut builder = Builder::new();
            builder.prefix("rotki-upload-");
            builder
        };
        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent)?,
            None => builder.tempdir()?,
        };

        let path = dir.path().join(file_name(file.filename(), fallback));
        file.save(&path).await?;
        debug!(path = %path.display(), size = file.len(), "Saved uploaded file");

        Ok(Self { dir, path })
    }

    /// Returns the path of the saved file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the temporary directory holding the file.
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

fn file_name(client: Option<&str>, fallback: &str) -> PathBuf {
    client
        .and_then(|name| Path::new(name).file_name())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(fallback))
}
