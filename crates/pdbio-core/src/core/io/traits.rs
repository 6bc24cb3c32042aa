use crate::core::models::structure::Structure;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Direction in which a file was being opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessMode::Read => write!(f, "reading"),
            AccessMode::Write => write!(f, "writing"),
        }
    }
}

/// A file could not be opened or created.
#[derive(Debug, thiserror::Error)]
#[error("Cannot open '{}' for {mode}: {source}", .path.display())]
pub struct FileAccessError {
    pub path: PathBuf,
    pub mode: AccessMode,
    #[source]
    pub source: io::Error,
}

impl FileAccessError {
    pub fn new(path: &Path, mode: AccessMode, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            mode,
            source,
        }
    }
}

/// Defines the interface for reading and writing structure file formats.
///
/// Implementors provide format-specific parsing and serialization from
/// buffered readers and writers; the path-based methods are derived from them.
pub trait StructureFile {
    /// Options controlling how input is parsed.
    type ReadOptions: Default;

    /// Options controlling which records are written.
    type WriteOptions: Default;

    /// Diagnostics collected while reading.
    type Report;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error> + From<FileAccessError>;

    /// Reads a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    /// * `options` - Parsing options.
    ///
    /// # Return
    ///
    /// Returns the parsed structure and the diagnostics gathered while parsing.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the options turn a parse issue into an error.
    fn read_from(
        reader: &mut impl BufRead,
        options: &Self::ReadOptions,
    ) -> Result<(Structure, Self::Report), Self::Error>;

    /// Writes a structure to a writer.
    ///
    /// # Arguments
    ///
    /// * `structure` - The structure to write.
    /// * `options` - Selects the record kinds to emit.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented or writing fails.
    fn write_to(
        structure: &Structure,
        options: &Self::WriteOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns a [`FileAccessError`] naming the path if the file cannot be
    /// opened, or any error from [`StructureFile::read_from`].
    fn read_from_path<P: AsRef<Path>>(
        path: P,
        options: &Self::ReadOptions,
    ) -> Result<(Structure, Self::Report), Self::Error> {
        let path = path.as_ref();
        info!("Reading {}.", path.display());
        let file = File::open(path)
            .map_err(|source| FileAccessError::new(path, AccessMode::Read, source))?;
        let mut reader = BufReader::new(file);
        let result = Self::read_from(&mut reader, options)?;
        info!("Done reading '{}'.", path.display());
        Ok(result)
    }

    /// Writes a structure to a file path, creating or truncating the file.
    ///
    /// The whole output is rendered before the file is opened, so a structure
    /// that cannot be written leaves an existing file at `path` untouched.
    ///
    /// # Errors
    ///
    /// Returns any error from [`StructureFile::write_to`], or a
    /// [`FileAccessError`] naming the path if the file cannot be created.
    fn write_to_path<P: AsRef<Path>>(
        structure: &Structure,
        options: &Self::WriteOptions,
        path: P,
    ) -> Result<(), Self::Error> {
        let path = path.as_ref();
        let mut rendered = Vec::new();
        Self::write_to(structure, options, &mut rendered)?;

        let mut file = File::create(path)
            .map_err(|source| FileAccessError::new(path, AccessMode::Write, source))?;
        file.write_all(&rendered)?;
        file.flush()?;
        info!("Done writing '{}'.", path.display());
        Ok(())
    }
}
