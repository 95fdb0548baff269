//! Persistence of rendered definitions
//!
//! Definitions are collected in an [`Accumulator`] during a batch and appended to a flat file,
//! from which they can be listed, cleared, or cut to the clipboard for pasting into Anki.

use std::collections::VecDeque;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::Error;

/// Rendered definitions waiting to be written to a [`Store`].
#[derive(Debug, Default)]
pub struct Accumulator {
    entries: VecDeque<String>,
}

impl Accumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub const fn new() -> Accumulator {
        Accumulator {
            entries: VecDeque::new(),
        }
    }

    /// Adds a rendered definition.
    pub fn push(&mut self, html: String) {
        self.entries.push_back(html);
    }

    /// Returns the number of pending definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no pending definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Something that can hold text for pasting elsewhere.
pub trait Clipboard {
    /// Replaces the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Clipboard`] if the clipboard is unavailable.
    fn set_text(&mut self, text: String) -> Result<(), Error>;
}

/// The system clipboard.
///
/// The connection to the clipboard is opened on first use, so batches that never cut don't
/// require a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: String) -> Result<(), Error> {
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(Error::Clipboard)?,
        };

        self.inner
            .insert(clipboard)
            .set_text(text)
            .map_err(Error::Clipboard)
    }
}

/// A flat file of rendered definitions.
///
/// The first definition in an empty file is written as is, every following definition is
/// separated by a blank line and wrapped in a `<div>`.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the file at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Store {
        Store { path: path.into() }
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the stored definitions, or an empty string if the file doesn't exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the file exists but can't be read.
    pub fn read(&self) -> Result<String, Error> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(err) => Err(self.error(err)),
        }
    }

    /// Appends a single rendered definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the file can't be opened or written.
    pub fn append(&self, html: &str) -> Result<(), Error> {
        let mut file = self.open_append()?;
        let len = file.metadata().map_err(|err| self.error(err))?.len();

        trace!(path = %self.path.display(), len, "appending definition");

        if len == 0 {
            file.write_all(html.as_bytes())
        } else {
            write!(file, "\n\n<div>{html}</div>")
        }
        .map_err(|err| self.error(err))
    }

    /// Appends all pending definitions of `accumulator` and empties it.
    ///
    /// Returns the number of definitions written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the file can't be opened or written. Definitions that were not
    /// written remain in the accumulator.
    pub fn flush(&self, accumulator: &mut Accumulator) -> Result<usize, Error> {
        let mut written = 0;

        while let Some(html) = accumulator.entries.front() {
            self.append(html)?;
            accumulator.entries.pop_front();
            written += 1;
        }

        if written > 0 {
            debug!(path = %self.path.display(), written, "flushed definitions");
        }

        Ok(written)
    }

    /// Empties the file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] if the file can't be truncated.
    pub fn clear(&self) -> Result<(), Error> {
        debug!(path = %self.path.display(), "clearing definitions");

        File::create(&self.path)
            .map(drop)
            .map_err(|err| self.error(err))
    }

    /// Copies the stored definitions to `clipboard` and empties the file.
    ///
    /// The file is left untouched if the clipboard can't be written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Store`] or [`Error::Clipboard`].
    pub fn cut(&self, clipboard: &mut dyn Clipboard) -> Result<(), Error> {
        let contents = self.read()?;

        clipboard.set_text(contents)?;
        self.clear()
    }

    fn open_append(&self) -> Result<File, Error> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|err| self.error(err))
    }

    fn error(&self, source: io::Error) -> Error {
        Error::Store {
            path: self.path.display().to_string(),
            source,
        }
    }
}
