//! A single restore, edit, save cycle.
//!
//! A session owns the field list and the running output log. It is opened
//! from a [`ConfigStore`] once, mutated by the shell, and written back
//! exactly once by [`Session::close`].

use rand::Rng;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::generator;
use crate::list::{FieldId, FieldList};
use crate::store::ConfigStore;

/// Where the session's starting field list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Read from the store's file.
    Restored,
    /// No file existed; the standard list was used.
    Default,
    /// Supplied by the caller.
    Provided,
}

pub struct Session {
    store: ConfigStore,
    fields: FieldList,
    output: Vec<Zeroizing<String>>,
    origin: Origin,
}

impl Session {
    /// Restore the saved field list, or start from
    /// [`FieldList::standard`] when nothing has been saved yet.
    ///
    /// Parse and validation failures are returned to the caller, which
    /// decides whether to fall back to [`Session::with_fields`].
    pub fn open(store: ConfigStore) -> Result<Self> {
        let (fields, origin) = match store.restore() {
            Ok(records) => (FieldList::from_records(&records)?, Origin::Restored),
            Err(Error::NotFound(path)) => {
                info!(path = %path.display(), "no saved configuration, using defaults");
                (FieldList::standard(), Origin::Default)
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            store,
            fields,
            output: Vec::new(),
            origin,
        })
    }

    pub fn with_fields(store: ConfigStore, fields: FieldList) -> Self {
        Self {
            store,
            fields,
            output: Vec::new(),
            origin: Origin::Provided,
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn fields(&self) -> &FieldList {
        &self.fields
    }

    pub fn add(&mut self, field: Field) -> FieldId {
        let id = self.fields.push(field);
        debug!(%id, "added field");
        id
    }

    pub fn remove(&mut self, id: FieldId) -> Result<Field> {
        let field = self.fields.remove(id)?;
        debug!(%id, kind = %field.kind(), "removed field");
        Ok(field)
    }

    /// Reconfigure the field behind `id`. The new field must be of the
    /// same kind.
    pub fn update(&mut self, id: FieldId, field: &Field) -> Result<()> {
        let current = self.fields.get_mut(id).ok_or(Error::UnknownField(id))?;
        current.apply_record(&field.to_record())?;
        debug!(%id, kind = %field.kind(), "updated field");
        Ok(())
    }

    /// Assemble a password and append it to the output log.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &str {
        for id in self.fields.blank() {
            warn!(%id, "field has no words and contributes nothing");
        }

        let password = generator::assemble(self.fields.fields(), rng);
        self.output.push(Zeroizing::new(password));
        self.output.last().map(|p| p.as_str()).unwrap_or_default()
    }

    /// Every password generated since the last [`Session::clear_output`].
    pub fn output(&self) -> impl Iterator<Item = &str> {
        self.output.iter().map(|p| p.as_str())
    }

    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// Persist the field list and end the session.
    pub fn close(self) -> Result<()> {
        self.store.save(self.fields.fields())
    }
}
