//! Save/Load functionality for persisting the game
//!
//! Uses bincode for the compact on-device save slot and serde_json for
//! human-readable exports. Both wrap the aggregate in a versioned envelope.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::GameState;

/// Version number for save file format (increment when format changes)
pub const SAVE_VERSION: u32 = 1;

/// Versioned snapshot of the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    /// Save format version
    pub version: u32,
    pub state: GameState,
}

impl SaveData {
    fn new(state: &GameState) -> Self {
        Self {
            version: SAVE_VERSION,
            state: state.clone(),
        }
    }

    fn into_state(self) -> Result<GameState, SaveError> {
        if self.version != SAVE_VERSION {
            log::warn!(
                "Refusing save with version {} (expected {})",
                self.version,
                SAVE_VERSION
            );
            return Err(SaveError::VersionMismatch {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(self.state)
    }
}

/// Save the game to a writer
pub fn save_state<W: Write>(writer: W, state: &GameState) -> Result<(), SaveError> {
    bincode::serialize_into(writer, &SaveData::new(state))?;
    Ok(())
}

/// Load the game from a reader
pub fn load_state<R: Read>(reader: R) -> Result<GameState, SaveError> {
    let save_data: SaveData = bincode::deserialize_from(reader)?;
    save_data.into_state()
}

/// Pretty-printed JSON of the versioned snapshot.
pub fn export_json(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string_pretty(&SaveData::new(state))?)
}

pub fn import_json(json: &str) -> Result<GameState, SaveError> {
    let save_data: SaveData = serde_json::from_str(json)?;
    save_data.into_state()
}

/// Write the save slot atomically: a sibling temp file is written and then
/// renamed over `path`.
pub fn save_to_path(path: &Path, state: &GameState) -> Result<(), SaveError> {
    let tmp = path.with_extension("tmp");
    {
        let mut writer = BufWriter::new(File::create(&tmp)?);
        save_state(&mut writer, state)?;
        writer.flush()?;
    }
    fs::rename(&tmp, path)?;
    log::info!("Saved game to {}", path.display());
    Ok(())
}

/// Load the save slot. `Ok(None)` when there is no save yet.
pub fn load_from_path(path: &Path) -> Result<Option<GameState>, SaveError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let state = load_state(BufReader::new(file))?;
    log::info!("Loaded game from {}", path.display());
    Ok(Some(state))
}

/// Errors that can occur during save/load
#[derive(Debug)]
pub enum SaveError {
    Io(std::io::Error),
    Bincode(Box<bincode::ErrorKind>),
    Json(serde_json::Error),
    VersionMismatch { expected: u32, found: u32 },
}

impl From<std::io::Error> for SaveError {
    fn from(e: std::io::Error) -> Self {
        SaveError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for SaveError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        SaveError::Bincode(e)
    }
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::Bincode(e) => write!(f, "Serialization error: {}", e),
            SaveError::Json(e) => write!(f, "JSON error: {}", e),
            SaveError::VersionMismatch { expected, found } => {
                write!(
                    f,
                    "Save version mismatch: expected {}, found {}",
                    expected, found
                )
            }
        }
    }
}

impl std::error::Error for SaveError {}
