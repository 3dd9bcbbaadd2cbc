//! Interactive session.
//!
//! Fields are restored once on entry and saved once on exit. Generated
//! passwords accumulate in the output until `clear`.

use anyhow::{Context, Result};
use clap::Parser;
use natpass::ConfigStore;
use rand::rngs::OsRng;

use crate::cli::{ShellCommand, ShellLine};
use crate::ui;

use super::{add, list, remove, update};

pub fn run(store: ConfigStore) -> Result<()> {
    let mut session = super::open_session(store)?;
    let mut rng = OsRng;

    println!("natpass shell. Type `help` for commands, `quit` to save and exit.");

    while let Some(line) = ui::read_line("natpass> ")? {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                e.print()?;
                continue;
            }
        };

        match command {
            ShellCommand::Gen { count } => {
                for _ in 0..count {
                    println!("{}", session.generate(&mut rng));
                }
            }
            ShellCommand::Add { field } => {
                add::run(&mut session, field);
            }
            ShellCommand::Update { id, field } => report(update::run(&mut session, id, field)),
            ShellCommand::Remove { id } => report(remove::run(&mut session, id)),
            ShellCommand::List => list::run(&session),
            ShellCommand::Output => {
                for (n, password) in session.output().enumerate() {
                    println!("{:>4}  {}", n + 1, password);
                }
            }
            ShellCommand::Clear => {
                session.clear_output();
                println!("Output cleared.");
            }
            ShellCommand::Copy => match session.output().last() {
                Some(password) => report(ui::copy_to_clipboard_in_background(password, 10)),
                None => println!("Nothing generated yet."),
            },
            ShellCommand::Quit => break,
        }
    }

    let path = session.store().path().to_path_buf();
    session.close().context("Failed to save configuration")?;
    println!("Fields saved to {}", path.display());
    Ok(())
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        println!("Error: {:#}", e);
    }
}
