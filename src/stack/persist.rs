//! Saving and restoring stacks across process restarts.
//!
//! A [`StackSnapshot`] is the serde form of a [`NavStack`]: the full
//! history (root first), the active position, and any saved stacks, as
//! JSON. Record keys are runtime identity and are not persisted; restoring
//! mints fresh records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::screen::Screen;
use crate::stack::{NavStack, Record, SavedStack};

/// Errors from snapshot IO and decoding.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read snapshot '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write snapshot '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse snapshot '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid snapshot: {message}")]
    Invalid { message: String },
}

/// Serialized form of a [`NavStack`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackSnapshot<S> {
    /// Full history, root first.
    screens: Vec<S>,
    /// Active position within `screens`.
    index: usize,
    /// Saved stacks, oldest save first.
    #[serde(default = "Vec::new")]
    saved: Vec<SavedSnapshot<S>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SavedSnapshot<S> {
    screens: Vec<S>,
    index: usize,
}

impl<S: Screen> StackSnapshot<S> {
    pub fn capture(stack: &NavStack<S>) -> Self {
        Self {
            screens: stack.history.iter().map(|r| r.screen().clone()).collect(),
            index: stack.index,
            saved: stack
                .saved
                .iter()
                .map(|s| SavedSnapshot {
                    screens: s.history.iter().map(|r| r.screen().clone()).collect(),
                    index: s.index,
                })
                .collect(),
        }
    }

    /// Rebuild a stack, validating the snapshot's shape first.
    pub fn into_stack(self) -> Result<NavStack<S>, PersistError> {
        let (history, index) = rebuild(self.screens, self.index)?;
        let mut saved = Vec::with_capacity(self.saved.len());
        for entry in self.saved {
            let (history, index) = rebuild(entry.screens, entry.index)?;
            saved.push(SavedStack { history, index });
        }
        Ok(NavStack {
            history,
            index,
            saved,
        })
    }
}

fn rebuild<S: Screen>(screens: Vec<S>, index: usize) -> Result<(Vec<Record<S>>, usize), PersistError> {
    if screens.is_empty() {
        return Err(PersistError::Invalid {
            message: "history must contain at least a root screen".to_string(),
        });
    }
    if index >= screens.len() {
        return Err(PersistError::Invalid {
            message: format!(
                "active index {} out of range for history of {}",
                index,
                screens.len()
            ),
        });
    }
    Ok((screens.into_iter().map(Record::new).collect(), index))
}

impl<S: Screen + Serialize + DeserializeOwned> NavStack<S> {
    /// Write this stack to `path` as a JSON snapshot.
    pub fn snapshot_to_file(&self, path: &Path) -> Result<(), PersistError> {
        let snapshot = StackSnapshot::capture(self);
        let json = serde_json::to_string_pretty(&snapshot).map_err(PersistError::Encode)?;
        fs::write(path, json).map_err(|source| PersistError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), depth = self.depth(), "stack snapshot written");
        Ok(())
    }

    /// Rebuild a stack from the JSON snapshot at `path`.
    pub fn restore_from_file(path: &Path) -> Result<Self, PersistError> {
        let content = fs::read_to_string(path).map_err(|source| PersistError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: StackSnapshot<S> =
            serde_json::from_str(&content).map_err(|source| PersistError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let stack = snapshot.into_stack()?;
        debug!(path = %path.display(), depth = stack.depth(), "stack snapshot restored");
        Ok(stack)
    }
}
