//! File creation on top of path allocation.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::api::error::Result;
use crate::api::naming::NamingScheme;
use crate::api::path::allocate_with;
use crate::diagnostics::trace_event;

/// A freshly created temporary file together with the path it lives at.
///
/// The caller owns the handle; dropping it closes the file but does not
/// delete it. Register [`path`](NamedFile::path) with a
/// [`TempRegistry`](crate::TempRegistry) to have it removed later.
#[derive(Debug)]
pub struct NamedFile {
    path: PathBuf,
    file: File,
}

impl NamedFile {
    /// Path the file was created at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The open file.
    pub fn file(&self) -> &File {
        &self.file
    }

    /// The open file, mutably.
    pub fn file_mut(&mut self) -> &mut File {
        &mut self.file
    }

    /// Discard the path and keep the handle.
    pub fn into_file(self) -> File {
        self.file
    }

    /// Split into path and handle.
    pub fn into_parts(self) -> (PathBuf, File) {
        (self.path, self.file)
    }
}

impl Write for NamedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Allocate an unused `dir/<prefix>NNN<suffix>` path and create the file.
///
/// Exhaustion is returned as [`TempFileError::Exhausted`]; a failed create
/// (missing directory, permissions, ...) as [`TempFileError::Io`] with the
/// original error kind.
///
/// [`TempFileError::Exhausted`]: crate::TempFileError::Exhausted
/// [`TempFileError::Io`]: crate::TempFileError::Io
pub fn create(dir: impl AsRef<Path>, prefix: &str, suffix: &str) -> Result<NamedFile> {
    create_with(&NamingScheme::DEFAULT, dir, prefix, suffix)
}

/// [`create`] with an explicit naming scheme.
pub fn create_with(
    scheme: &NamingScheme,
    dir: impl AsRef<Path>,
    prefix: &str,
    suffix: &str,
) -> Result<NamedFile> {
    let path = allocate_with(scheme, dir, prefix, suffix)?;
    // Truncates if something appeared between probe and create.
    let file = File::create(&path)?;
    trace_event!("created {}", path.display());
    Ok(NamedFile { path, file })
}
