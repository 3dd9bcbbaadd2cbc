//! Delete the saved field list.

use anyhow::{Context, Result};
use natpass::ConfigStore;

use crate::ui;

pub fn run(store: &ConfigStore, force: bool) -> Result<()> {
    if !force && !ui::prompt_yes(&format!("Delete {}?", store.path().display())) {
        println!("Aborted.");
        return Ok(());
    }

    if store.clear().context("Failed to delete configuration")? {
        println!("Saved fields removed. The defaults will be used next time.");
    } else {
        println!("Nothing to reset: {} does not exist.", store.path().display());
    }

    Ok(())
}
