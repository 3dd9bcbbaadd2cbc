//! Reconfigure an existing field.

use anyhow::Result;
use natpass::{FieldId, Session};

use crate::cli::FieldArgs;

pub fn run(session: &mut Session, id: u32, args: FieldArgs) -> Result<()> {
    let field = args.into_field();
    session.update(FieldId::new(id), &field)?;
    println!("Updated field {} ({})", id, field);
    Ok(())
}
