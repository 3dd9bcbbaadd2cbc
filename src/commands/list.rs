//! List the configured fields.

use natpass::Session;

pub fn run(session: &Session) {
    if session.fields().is_empty() {
        println!("No fields configured. Add one with `natpass add`.");
        return;
    }

    println!("Fields:");
    for (id, field) in session.fields().iter() {
        println!("{:>4}  {}", id, field);
    }
}
