//! Flat line-oriented save format
//!
//! One field per line, in a fixed order:
//!
//! ```text
//! name
//! level
//! experience
//! <stat count>    then (name, value) line pairs
//! <item count>    then (name, count) line pairs
//! <gear count>    then (slot, item) line pairs
//! ```
//!
//! The format persists name, progression, stats, inventory, and gear only.
//! Health, weapon damage lookups, abilities, statuses, and crit settings are
//! not carried; max health is re-derived from level on load and the character
//! comes back at full health.

use crate::character::Character;
use thiserror::Error;

/// Errors that can occur when reading save data
#[derive(Debug, Error)]
pub enum SaveError {
    /// Input ended before the named field
    #[error("save data ended before {0}")]
    Truncated(&'static str),
    /// A numeric field did not parse
    #[error("invalid number for {field}: {source}")]
    InvalidNumber {
        field: &'static str,
        source: std::num::ParseIntError,
    },
}

/// Write a character snapshot in the flat format
pub fn serialize(character: &Character) -> String {
    let mut out = String::new();
    let mut line = |s: &str| {
        out.push_str(s);
        out.push('\n');
    };

    line(character.name());
    line(&character.level().to_string());
    line(&character.experience().to_string());

    line(&character.stats.len().to_string());
    for (stat, value) in &character.stats {
        line(stat);
        line(&value.to_string());
    }

    line(&character.inventory().distinct().to_string());
    for (item, count) in character.inventory().iter() {
        line(item);
        line(&count.to_string());
    }

    line(&character.gear().len().to_string());
    for (slot, item) in character.gear().iter() {
        line(slot);
        line(item);
    }

    out
}

/// Rebuild a character from the flat format
///
/// Fields are read in exactly the order `serialize` writes them.
pub fn deserialize(input: &str) -> Result<Character, SaveError> {
    let mut reader = LineReader::new(input);

    let name = reader.next_str("name")?.to_string();
    let level: u32 = reader.next_num("level")?;
    let experience: i32 = reader.next_num("experience")?;

    let mut character = Character::new(&name, 0);
    character.set_progression(level, experience);

    let stat_count: usize = reader.next_num("stat count")?;
    for _ in 0..stat_count {
        let stat = reader.next_str("stat name")?.to_string();
        let value = reader.next_num("stat value")?;
        character.set_stat(&stat, value);
    }

    let item_count: usize = reader.next_num("item count")?;
    for _ in 0..item_count {
        let item = reader.next_str("item name")?.to_string();
        let count = reader.next_num("item count value")?;
        character.add_to_inventory(&item, count);
    }

    let gear_count: usize = reader.next_num("gear count")?;
    for _ in 0..gear_count {
        let slot = reader.next_str("gear slot")?.to_string();
        let item = reader.next_str("gear item")?.to_string();
        character.restore_gear(&slot, &item);
    }

    Ok(character)
}

/// Field-by-field reader over newline-delimited save data
struct LineReader<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> LineReader<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
        }
    }

    fn next_str(&mut self, field: &'static str) -> Result<&'a str, SaveError> {
        self.lines.next().ok_or(SaveError::Truncated(field))
    }

    fn next_num<T: std::str::FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        field: &'static str,
    ) -> Result<T, SaveError> {
        self.next_str(field)?
            .trim()
            .parse()
            .map_err(|source| SaveError::InvalidNumber { field, source })
    }
}
