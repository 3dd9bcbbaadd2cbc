//! On-disk storage of the field configuration.
//!
//! The configuration is a single JSON document holding one record per
//! field, in list order:
//!
//! ```json
//! {
//!     "inputs": [
//!         { "type": "words", "input": "Big\nSmall" },
//!         { "type": "digits", "input": 2 }
//!     ]
//! }
//! ```
//!
//! The file is rewritten in full on every save. By default it lives next
//! to the running executable under [`CONFIG_FILE_NAME`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::field::{Field, FieldRecord};

pub const CONFIG_FILE_NAME: &str = "input.current";

/// Top-level document written by [`ConfigStore::save`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersistedConfig {
    /// Field records in generation order
    pub inputs: Vec<FieldRecord>,
}

/// Reads and writes the configuration file at a fixed path.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located next to the running executable.
    pub fn beside_executable() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|source| Error::Io {
            path: PathBuf::from(CONFIG_FILE_NAME),
            source,
        })?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(dir.join(CONFIG_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the configuration of `fields`, replacing any existing file.
    pub fn save<'a, I>(&self, fields: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let config = PersistedConfig {
            inputs: fields.into_iter().map(Field::to_record).collect(),
        };

        let mut json = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut json, formatter);
        config
            .serialize(&mut serializer)
            .map_err(|e| self.io_error(e.into()))?;

        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), fields = config.inputs.len(), "saved configuration");
        Ok(())
    }

    /// Load the stored field records.
    ///
    /// # Errors
    ///
    /// - `NotFound` when no file exists yet
    /// - `Parse` when the file is not UTF-8 JSON or has no `inputs` array
    /// - `Io` for any other read failure
    pub fn restore(&self) -> Result<Vec<FieldRecord>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::NotFound(self.path.clone()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let config: PersistedConfig =
            serde_json::from_slice(&data).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), fields = config.inputs.len(), "restored configuration");
        Ok(config.inputs)
    }

    /// Delete the stored configuration. Returns `false` if there was none.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "removed saved configuration");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Copy the current file aside before it gets overwritten.
    ///
    /// Writes `<file>.bak`, or `<file>.bak.<hex>` when a backup already
    /// exists. Returns the path written.
    pub fn backup(&self) -> Result<PathBuf> {
        let mut bak = self.sibling(".bak");
        if bak.exists() {
            let suffix = rand::rngs::OsRng.next_u32();
            bak = self.sibling(&format!(".bak.{:x}", suffix));
        }

        fs::copy(&self.path, &bak).map_err(|e| self.io_error(e))?;
        info!(backup = %bak.display(), "backed up configuration");
        Ok(bak)
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn io_error(&self, source: io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Count;
    use tempfile::tempdir;

    #[test]
    fn save_then_restore() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        let fields = [
            Field::from_words(["Big", "Small"]),
            Field::Digits(Count::new(2).unwrap()),
        ];

        store.save(&fields).unwrap();
        let records = store.restore().unwrap();

        let kinds: Vec<&str> = records.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["words", "digits"]);
        assert_eq!(records[0].input.as_str(), Some("Big\nSmall"));
        assert_eq!(records[1].input.as_i64(), Some(2));
    }

    #[test]
    fn file_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        store.save(&[Field::Characters(Count::new(3).unwrap())]).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.starts_with("{\n    \"inputs\": ["));
        assert!(text.contains("\"type\": \"characters\""));
        assert!(text.contains("\"input\": 3"));
    }

    #[test]
    fn save_overwrites() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        store
            .save(&[
                Field::Digits(Count::new(4).unwrap()),
                Field::Digits(Count::new(5).unwrap()),
            ])
            .unwrap();
        store.save(&[Field::from_words(["one"])]).unwrap();

        assert_eq!(store.restore().unwrap().len(), 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.json"));
        assert!(matches!(store.restore(), Err(Error::NotFound(_))));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));

        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.restore(), Err(Error::Parse { .. })));

        fs::write(store.path(), r#"{ "fields": [] }"#).unwrap();
        assert!(matches!(store.restore(), Err(Error::Parse { .. })));
    }

    #[test]
    fn non_utf8_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), [0xff, 0xfe, b'{', b'}']).unwrap();

        assert!(matches!(store.restore(), Err(Error::Parse { .. })));
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("missing-dir").join(CONFIG_FILE_NAME));
        assert!(matches!(store.save(&[] as &[Field]), Err(Error::Io { .. })));
    }

    #[test]
    fn clear_removes_file_once() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        store.save(&[] as &[Field]).unwrap();

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(!store.path().exists());
    }

    #[test]
    fn backup_never_clobbers() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), "broken").unwrap();

        let first = store.backup().unwrap();
        let second = store.backup().unwrap();

        assert_eq!(first, dir.path().join("input.current.bak"));
        assert_ne!(first, second);
        assert_eq!(fs::read_to_string(second).unwrap(), "broken");
    }
}
