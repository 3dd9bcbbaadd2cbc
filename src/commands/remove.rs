//! Remove a field from the list.

use anyhow::Result;
use natpass::{FieldId, Session};

pub fn run(session: &mut Session, id: u32) -> Result<()> {
    let field = session.remove(FieldId::new(id))?;
    println!("Removed {} field {}", field.kind(), id);
    Ok(())
}
