//! Save files.
//!
//! A save file is a bincode-encoded `SaveFile` envelope: the game kind, the
//! board size, an optional pair of participant identities and the memento.
//! Each save or load opens the file, streams the whole envelope and closes it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::history::{GameSnapshot, Memento};
use crate::core::{GameKind, PersistError};

/// Identity tokens of the two seats (Black first).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identities {
    pub black: String,
    pub white: String,
}

impl Identities {
    /// Create an identity pair.
    pub fn new(black: impl Into<String>, white: impl Into<String>) -> Self {
        Self {
            black: black.into(),
            white: white.into(),
        }
    }
}

/// On-disk envelope for a memento.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveFile<S> {
    pub kind: GameKind,
    pub size: usize,
    pub identities: Option<Identities>,
    pub memento: Memento<S>,
}

impl<S: GameSnapshot> SaveFile<S> {
    /// Write the envelope to `path`, replacing any existing file.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), PersistError> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Read an envelope from `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PersistError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(bincode::deserialize_from(reader)?)
    }

    /// Check if the file may be restored for the given identities.
    ///
    /// Files without identities accept anyone. Files with identities
    /// require the exact same pair.
    #[must_use]
    pub fn accepts(&self, identities: Option<&Identities>) -> bool {
        match &self.identities {
            None => true,
            Some(saved) => identities == Some(saved),
        }
    }
}
