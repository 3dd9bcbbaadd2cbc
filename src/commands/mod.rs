//! Subcommand handlers.
//!
//! Every command except `reset` runs inside one session: the field list is
//! restored first and saved once the command succeeds. Handlers sit in one
//! file each behind a `run()` entry point.

use anyhow::{Context, Result};
use natpass::{ConfigStore, Error, FieldList, Session};
use tracing::warn;

use crate::cli::{Cli, Commands};

pub mod add;
pub mod gen_pw;
pub mod list;
pub mod remove;
pub mod reset;
pub mod shell;
pub mod update;

pub fn dispatch(cli: Cli) -> Result<()> {
    let store = match cli.file {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::beside_executable().context("Failed to locate configuration file")?,
    };

    match cli.command {
        Commands::Gen(args) => in_session(store, |s| gen_pw::run(s, args)),
        Commands::Add { field } => in_session(store, |s| {
            add::run(s, field);
            Ok(())
        }),
        Commands::Update { id, field } => in_session(store, |s| update::run(s, id, field)),
        Commands::Remove { id } => in_session(store, |s| remove::run(s, id)),
        Commands::List => in_session(store, |s| {
            list::run(s);
            Ok(())
        }),
        Commands::Reset { force } => reset::run(&store, force),
        Commands::Shell => shell::run(store),
    }
}

fn in_session<F>(store: ConfigStore, f: F) -> Result<()>
where
    F: FnOnce(&mut Session) -> Result<()>,
{
    let mut session = open_session(store)?;
    f(&mut session)?;
    session.close().context("Failed to save configuration")
}

/// Open a session, falling back to the default fields when the saved
/// file cannot be used. The unusable file is backed up first since the
/// session will overwrite it on close.
pub fn open_session(store: ConfigStore) -> Result<Session> {
    match Session::open(store.clone()) {
        Ok(session) => Ok(session),
        Err(e @ (Error::Parse { .. } | Error::InvalidConfig(_))) => {
            warn!(error = %e, "saved configuration is unusable");
            let backup = store
                .backup()
                .context("Failed to back up unusable configuration")?;
            eprintln!("Could not use saved fields: {}", e);
            eprintln!(
                "Starting from the default fields. The old file was copied to {}",
                backup.display()
            );
            Ok(Session::with_fields(store, FieldList::standard()))
        }
        Err(e) => Err(e).context("Failed to load configuration"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use natpass::{Origin, CONFIG_FILE_NAME};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn unusable_file_is_backed_up_and_replaced_by_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), [0xff, 0xfe, b'{', b'}']).unwrap();

        let session = open_session(store).unwrap();

        assert_eq!(session.origin(), Origin::Provided);
        assert_eq!(session.fields(), &FieldList::standard());
        let backup = dir.path().join("input.current.bak");
        assert_eq!(fs::read(backup).unwrap(), vec![0xff, 0xfe, b'{', b'}']);
    }

    #[test]
    fn unknown_field_type_falls_back_too() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));
        fs::write(store.path(), r#"{ "inputs": [ { "type": "emoji", "input": 2 } ] }"#).unwrap();

        let session = open_session(store).unwrap();

        assert_eq!(session.fields(), &FieldList::standard());
        assert!(dir.path().join("input.current.bak").exists());
    }

    #[test]
    fn missing_file_uses_defaults_without_backup() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join(CONFIG_FILE_NAME));

        let session = open_session(store).unwrap();

        assert_eq!(session.origin(), Origin::Default);
        assert!(!dir.path().join("input.current.bak").exists());
    }
}
