//! Password fields.
//!
//! A field is one configured source of password material. Each call to
//! [`Field::generate`] draws a fresh fragment from it; the password itself
//! is the concatenation of the fragments of every field in a list (see
//! [`crate::generator`]).
//!
//! There are three kinds of field:
//!
//! - **Words**: free text, one candidate per line. Lines are trimmed and
//!   blank lines skipped when generating, but the text is stored verbatim.
//! - **Digits**: a run of `count` random digits.
//! - **Characters**: a run of `count` random special characters drawn
//!   from [`SPECIAL_CHARACTERS`].
//!
//! Fields convert to and from [`FieldRecord`], the shape stored in the
//! configuration file.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Digits drawn by a [`Field::Digits`] field.
pub const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Symbols drawn by a [`Field::Characters`] field, in draw-index order.
pub const SPECIAL_CHARACTERS: &[char] = &['!', '#', '_', '-', '&', '%'];

/// Number of characters produced by a digits or characters field.
///
/// Always within `Count::MIN..=Count::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Count(u8);

impl Count {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Returns `None` when `value` is outside `MIN..=MAX`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Clamp an arbitrary integer into range.
    pub fn saturating(value: i64) -> Self {
        Self(value.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a field, as written in the `type` key of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Words,
    Digits,
    Characters,
}

impl FieldKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Words => "words",
            FieldKind::Digits => "digits",
            FieldKind::Characters => "characters",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "words" => Ok(FieldKind::Words),
            "digits" => Ok(FieldKind::Digits),
            "characters" => Ok(FieldKind::Characters),
            other => Err(Error::InvalidConfig(format!("unknown field type '{}'", other))),
        }
    }
}

/// Serialized configuration of a single field.
///
/// `input` is the raw word text for a words field and an integer count
/// for the other two kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub input: Value,
}

/// A configured source of password material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// Raw multi-line text, one candidate word per line.
    Words(String),
    Digits(Count),
    Characters(Count),
}

impl Field {
    /// An unconfigured field of the given kind: no words, or a count of one.
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Words => Field::Words(String::new()),
            FieldKind::Digits => Field::Digits(Count::default()),
            FieldKind::Characters => Field::Characters(Count::default()),
        }
    }

    /// A words field holding one line per item of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
        Field::Words(lines.join("\n"))
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Words(_) => FieldKind::Words,
            Field::Digits(_) => FieldKind::Digits,
            Field::Characters(_) => FieldKind::Characters,
        }
    }

    /// Trimmed, non-empty lines of a words field. Empty for other kinds.
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            Field::Words(text) => text
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect(),
            Field::Digits(_) | Field::Characters(_) => Vec::new(),
        }
    }

    /// True for a words field with nothing to choose from.
    pub fn is_blank(&self) -> bool {
        matches!(self, Field::Words(_)) && self.candidates().is_empty()
    }

    /// Draw one fragment from this field.
    ///
    /// A words field without candidates yields an empty string.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match self {
            Field::Words(_) => self
                .candidates()
                .choose(rng)
                .map(|word| (*word).to_owned())
                .unwrap_or_default(),
            Field::Digits(count) => draw(DIGITS, *count, rng),
            Field::Characters(count) => draw(SPECIAL_CHARACTERS, *count, rng),
        }
    }

    pub fn to_record(&self) -> FieldRecord {
        let input = match self {
            Field::Words(text) => Value::from(text.as_str()),
            Field::Digits(count) | Field::Characters(count) => Value::from(count.get()),
        };

        FieldRecord {
            kind: self.kind().as_str().to_owned(),
            input,
        }
    }

    /// Build a field from a stored record, dispatching on its `type`.
    pub fn from_record(record: &FieldRecord) -> Result<Self> {
        let kind: FieldKind = record.kind.parse()?;
        let mut field = Field::empty(kind);
        field.apply_record(record)?;
        Ok(field)
    }

    /// Replace this field's configuration with the one in `record`.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` when the record is of another kind or its `input`
    /// has the wrong JSON type. Counts outside the allowed range are
    /// clamped rather than rejected.
    pub fn apply_record(&mut self, record: &FieldRecord) -> Result<()> {
        let kind: FieldKind = record.kind.parse()?;
        if kind != self.kind() {
            return Err(Error::InvalidConfig(format!(
                "cannot restore a {} field from a {} record",
                self.kind(),
                kind
            )));
        }

        match self {
            Field::Words(text) => {
                let input = record.input.as_str().ok_or_else(|| {
                    Error::InvalidConfig(format!(
                        "words input must be a string, found {}",
                        record.input
                    ))
                })?;
                *text = input.to_owned();
            }
            Field::Digits(count) | Field::Characters(count) => {
                *count = count_from_value(&record.input, kind)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Words(_) => {
                let words = self.candidates();
                if words.is_empty() {
                    write!(f, "words: (none)")
                } else {
                    write!(f, "words: {}", words.join(", "))
                }
            }
            Field::Digits(count) => write!(f, "digits: {}", count),
            Field::Characters(count) => write!(f, "characters: {}", count),
        }
    }
}

fn draw<R: Rng + ?Sized>(set: &[char], count: Count, rng: &mut R) -> String {
    (0..count.get())
        .map(|_| set[rng.gen_range(0..set.len())])
        .collect()
}

fn count_from_value(value: &Value, kind: FieldKind) -> Result<Count> {
    let raw = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX)),
        _ => None,
    }
    .ok_or_else(|| {
        Error::InvalidConfig(format!("{} input must be an integer, found {}", kind, value))
    })?;

    let count = Count::saturating(raw);
    if i64::from(count.get()) != raw {
        warn!(
            kind = %kind,
            requested = %value,
            applied = count.get(),
            "field count out of range, clamped"
        );
    }

    Ok(count)
}
