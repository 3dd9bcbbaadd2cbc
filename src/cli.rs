//! Command-line interface definitions for natpass.
//!
//! This module describes the terminal surface using `clap`: the one-shot
//! subcommands and the line grammar of the interactive shell. It holds no
//! application logic.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use natpass::{Count, Field};

#[derive(Parser)]
#[command(
    name = "natpass",
    version,
    about = "Memorable passwords assembled from word, digit and symbol fields",
    long_about = r#"
natpass builds a password by taking one random piece from each field in
an ordered list and joining them together:

  words       one line picked at random from a word list
  digits      a run of random digits 0-9
  characters  a run of random symbols from ! # _ - & %

Typical usage:
  natpass list
  natpass add words Red Green Blue
  natpass add digits 3
  natpass gen -n 5
  natpass shell

Tips:
  For a memorable password, fill all but the last word field with
  adjectives (Pink, Big, Small) and the last with nouns (House, Apple,
  Shoe), giving passwords like BigHouse42! or SmallPinkShoe7#.
  Capitalized words add a little extra strength.

Save state:
  The field list is saved to 'input.current' next to the executable
  whenever a command finishes. Run `natpass reset` (or delete that file)
  to start over from the default fields.
"#
)]
pub struct Cli {
    /// Use this configuration file instead of the one next to the executable
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate passwords from the configured fields
    ///
    /// Each password takes one random piece from every field, in list
    /// order.
    Gen(GenArgs),

    /// Append a field to the list
    Add {
        #[command(subcommand)]
        field: FieldArgs,
    },

    /// Reconfigure an existing field
    ///
    /// The field keeps its position; its kind cannot change.
    Update {
        /// Id of the field, as shown by `list`
        id: u32,

        #[command(subcommand)]
        field: FieldArgs,
    },

    /// Remove a field from the list
    Remove {
        /// Id of the field, as shown by `list`
        id: u32,
    },

    /// Show the configured fields and their ids
    List,

    /// Forget the saved fields and go back to the defaults
    Reset {
        /// Do not ask for confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Start an interactive session
    ///
    /// Passwords generated in the shell accumulate until `clear`. The
    /// field list is saved when the shell exits.
    Shell,
}

#[derive(Args, Clone, Debug)]
pub struct GenArgs {
    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Copy the last password to the clipboard for 10 seconds
    #[arg(short, long)]
    pub copy: bool,
}

/// Configuration of a single field.
#[derive(Subcommand, Clone, Debug)]
pub enum FieldArgs {
    /// Word list; one word is picked per password
    Words {
        /// Candidate words, one per line of the field
        words: Vec<String>,
    },

    /// Run of random digits
    Digits {
        /// Number of digits (1-100)
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=100))]
        count: u8,
    },

    /// Run of random special characters
    Characters {
        /// Number of characters (1-100)
        #[arg(default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=100))]
        count: u8,
    },
}

impl FieldArgs {
    pub fn into_field(self) -> Field {
        match self {
            FieldArgs::Words { words } => Field::from_words(words),
            FieldArgs::Digits { count } => Field::Digits(Count::saturating(i64::from(count))),
            FieldArgs::Characters { count } => {
                Field::Characters(Count::saturating(i64::from(count)))
            }
        }
    }
}

/// One line typed into the interactive shell.
#[derive(Parser)]
#[command(name = "natpass", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand)]
pub enum ShellCommand {
    /// Generate passwords and append them to the output
    Gen {
        /// Number of passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },

    /// Append a field to the list
    Add {
        #[command(subcommand)]
        field: FieldArgs,
    },

    /// Reconfigure an existing field
    Update {
        id: u32,

        #[command(subcommand)]
        field: FieldArgs,
    },

    /// Remove a field from the list
    Remove { id: u32 },

    /// Show the configured fields and their ids
    List,

    /// Show every password generated since the last clear
    Output,

    /// Clear the output
    Clear,

    /// Copy the last password to the clipboard for 10 seconds
    Copy,

    /// Save the fields and leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use natpass::FieldKind;

    #[test]
    fn counts_outside_range_are_rejected() {
        for kind in ["digits", "characters"] {
            for count in ["0", "101", "-1"] {
                let parsed = Cli::try_parse_from(["natpass", "add", kind, count]);
                assert!(parsed.is_err(), "{} {} should be rejected", kind, count);
            }
        }
    }

    #[test]
    fn counts_inside_range_become_fields() {
        let cli = Cli::try_parse_from(["natpass", "add", "characters", "100"]).unwrap();
        match cli.command {
            Commands::Add { field } => {
                assert_eq!(field.into_field(), Field::Characters(Count::new(100).unwrap()))
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn words_become_lines() {
        let cli = Cli::try_parse_from(["natpass", "update", "2", "words", "Big", "Small"]).unwrap();
        match cli.command {
            Commands::Update { id, field } => {
                assert_eq!(id, 2);
                let field = field.into_field();
                assert_eq!(field.kind(), FieldKind::Words);
                assert_eq!(field.candidates(), vec!["Big", "Small"]);
            }
            _ => panic!("expected update"),
        }
    }

    #[test]
    fn shell_lines_parse_without_binary_name() {
        let line = ShellLine::try_parse_from(["gen", "-n", "3"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Gen { count: 3 }));

        let line = ShellLine::try_parse_from(["exit"]).unwrap();
        assert!(matches!(line.command, ShellCommand::Quit));
    }
}
