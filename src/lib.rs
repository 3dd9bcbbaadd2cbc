//! natpass: memorable passwords assembled from configurable fields.
//!
//! A password is built by concatenating one random fragment from each
//! field in an ordered list: a word picked from a word list, a run of
//! digits, or a run of special characters. The field list is saved as
//! JSON between runs.
//!
//! ```no_run
//! use natpass::{ConfigStore, Session};
//!
//! let store = ConfigStore::beside_executable()?;
//! let mut session = Session::open(store)?;
//! println!("{}", session.generate(&mut rand::rngs::OsRng));
//! session.close()?;
//! # Ok::<(), natpass::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod generator;
pub mod list;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use field::{Count, Field, FieldKind, FieldRecord, SPECIAL_CHARACTERS};
pub use generator::assemble;
pub use list::{FieldId, FieldList};
pub use session::{Origin, Session};
pub use store::{ConfigStore, PersistedConfig, CONFIG_FILE_NAME};
