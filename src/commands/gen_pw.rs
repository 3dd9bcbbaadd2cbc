//! Generate passwords from the configured fields.
//!
//! Passwords are printed as they are assembled and dropped right after;
//! only the last one is kept around in case it should be copied.

use std::io::{self, Write};

use anyhow::Result;
use natpass::{FieldList, Session};
use rand::rngs::OsRng;
use rand::Rng;
use tracing::warn;
use zeroize::Zeroizing;

use crate::{cli::GenArgs, ui};

pub fn run(session: &Session, args: GenArgs) -> Result<()> {
    let fields = session.fields();
    if fields.is_empty() {
        println!("No fields configured. Add one with `natpass add`.");
        return Ok(());
    }

    for id in fields.blank() {
        warn!(%id, "field has no words and contributes nothing");
    }

    let last = print_passwords(fields, args.count, &mut OsRng, &mut io::stdout().lock())?;

    if args.copy {
        if let Some(last) = last {
            if let Err(e) = ui::copy_to_clipboard_and_wait(&last, 10) {
                println!("Failed to copy to clipboard: {}", e);
            }
        }
    }

    Ok(())
}

fn print_passwords<R, W>(
    fields: &FieldList,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<Option<Zeroizing<String>>>
where
    R: Rng + ?Sized,
    W: Write,
{
    let mut last = None;
    for _ in 0..count {
        let password = Zeroizing::new(natpass::assemble(fields.fields(), &mut *rng));
        writeln!(out, "{}", password.as_str())?;
        last = Some(password);
    }
    Ok(last)
}
