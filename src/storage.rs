//! Persistence of the hand list.
//!
//! The hand list is stored as one JSON array under a single key. Seen cards,
//! deck count and the pending entry are not persisted.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::StorageError;
use crate::session::RecordedHand;

/// A key-value store holding persisted sessions.
pub trait Storage {
    /// Reads the value under `key`, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    /// Creates empty storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Encodes a hand list as JSON.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_hands(hands: &[RecordedHand]) -> Result<String, StorageError> {
    serde_json::to_string(hands).map_err(|err| StorageError::Encode(err.to_string()))
}

/// Decodes a JSON hand list.
///
/// # Errors
///
/// Returns the parser error if the text is not a valid hand list.
pub fn decode_hands(text: &str) -> Result<Vec<RecordedHand>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Returns whether a decoded hand list could have been built by submissions:
/// every hand passes [`RecordedHand::validate`] and ids strictly increase.
fn is_consistent(key: &str, hands: &[RecordedHand]) -> bool {
    for hand in hands {
        if let Err(err) = hand.validate() {
            log::warn!("discarding session under `{key}`: hand {}: {err}", hand.id);
            return false;
        }
    }
    if hands.windows(2).any(|pair| pair[0].id >= pair[1].id) {
        log::warn!("discarding session under `{key}`: hand ids out of order");
        return false;
    }
    true
}

/// Loads the hand list stored under `key`.
///
/// An absent key, an unreadable backend, an unparsable value or a list that
/// breaks the submission rules all yield an empty list.
pub fn load_hands<S: Storage + ?Sized>(storage: &S, key: &str) -> Vec<RecordedHand> {
    let text = match storage.read(key) {
        Ok(Some(text)) => text,
        Ok(None) => return Vec::new(),
        Err(err) => {
            log::warn!("could not read `{key}`, starting empty: {err}");
            return Vec::new();
        }
    };

    match decode_hands(&text) {
        Ok(hands) if is_consistent(key, &hands) => hands,
        Ok(_) => Vec::new(),
        Err(err) => {
            log::warn!("discarding corrupt session under `{key}`: {err}");
            Vec::new()
        }
    }
}

/// Stores the hand list under `key`.
///
/// # Errors
///
/// Returns an error if encoding or the backend write fails.
pub fn save_hands<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    hands: &[RecordedHand],
) -> Result<(), StorageError> {
    let text = encode_hands(hands)?;
    storage.write(key, &text)
}

#[cfg(feature = "std")]
pub use file::FileStorage;

#[cfg(feature = "std")]
mod file {
    use alloc::string::{String, ToString};
    use std::fs;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use super::Storage;
    use crate::error::StorageError;

    /// Storage keeping each key in `<dir>/<key>.json`.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        /// Creates storage rooted at `dir`. The directory is created on the
        /// first write.
        #[must_use]
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        fn path(&self, key: &str) -> PathBuf {
            self.dir.join(alloc::format!("{key}.json"))
        }
    }

    fn backend(err: &std::io::Error) -> StorageError {
        StorageError::Backend(err.to_string())
    }

    impl Storage for FileStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            match fs::read_to_string(self.path(key)) {
                Ok(text) => Ok(Some(text)),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
                Err(err) => Err(backend(&err)),
            }
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            fs::create_dir_all(&self.dir).map_err(|err| backend(&err))?;
            let path = self.path(key);
            let tmp = path.with_extension("json.tmp");
            fs::write(&tmp, value).map_err(|err| backend(&err))?;
            fs::rename(&tmp, &path).map_err(|err| backend(&err))
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            match fs::remove_file(self.path(key)) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
                Err(err) => Err(backend(&err)),
            }
        }
    }
}
