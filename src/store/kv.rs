use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{InviteError, InviteResult};

/// Key under which the confirmed guest name is persisted.
pub const PLAYER_NAME_KEY: &str = "playerName";

/// Minimal local key/value storage: one string value per key, no schema.
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent.
    fn get(&self, key: &str) -> InviteResult<Option<String>>;
    /// Insert or overwrite a value.
    fn set(&mut self, key: &str, value: &str) -> InviteResult<()>;
    /// Remove a value. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> InviteResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &mut S {
    fn get(&self, key: &str) -> InviteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> InviteResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> InviteResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> InviteResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> InviteResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> InviteResult<()> {
        (**self).remove(key)
    }
}

/// In-process store for tests and one-shot commands.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> InviteResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> InviteResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> InviteResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a flat JSON object file, rewritten on every mutation.
///
/// A missing file is an empty store; the file (and its parent directory) is created on the first
/// write.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> InviteResult<Self> {
        let path = path.into();
        let entries = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                InviteError::storage(format!("parse store '{}': {e}", path.display()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read store '{}'", path.display()))
                    .into());
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to a sibling temp file, then rename it over the store file.
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> InviteResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create store dir '{}'", parent.display()))?;
        }
        let json =
            serde_json::to_vec_pretty(entries).map_err(|e| InviteError::serde(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json)
            .with_context(|| format!("write store temp file '{}'", tmp_path.display()))?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(anyhow::Error::new(e)
                .context(format!("commit store '{}'", self.path.display()))
                .into());
        }
        Ok(())
    }

    /// Persist `next`, then adopt it. On failure the in-memory entries keep matching the file.
    fn commit(&mut self, next: BTreeMap<String, String>) -> InviteResult<()> {
        self.write_entries(&next)?;
        self.entries = next;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> InviteResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> InviteResult<()> {
        if self.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.commit(next)
    }

    fn remove(&mut self, key: &str) -> InviteResult<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.clone();
        next.remove(key);
        self.commit(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/kv.rs"]
mod tests;
