//! Append a field to the list.

use natpass::{FieldId, Session};

use crate::cli::FieldArgs;

pub fn run(session: &mut Session, args: FieldArgs) -> FieldId {
    let field = args.into_field();
    let kind = field.kind();
    if field.is_blank() {
        println!("Note: the new words field is empty and adds nothing until updated.");
    }

    let id = session.add(field);
    println!("Added {} field {}", kind, id);
    id
}
