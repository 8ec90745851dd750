//! Splitting command arguments into `prefix:value` groups.

use std::collections::HashMap;
use std::fmt;

/// Marks the start of an argument, e.g. `name:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Prefix(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("name:");
pub const PREFIX_PHONE: Prefix = Prefix::new("phone:");
pub const PREFIX_EMAIL: Prefix = Prefix::new("email:");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("address:");
pub const PREFIX_TAG: Prefix = Prefix::new("tag:");
pub const PREFIX_PHOTO: Prefix = Prefix::new("photo:");
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("desc:");
pub const PREFIX_VENUE: Prefix = Prefix::new("venue:");
pub const PREFIX_START: Prefix = Prefix::new("start:");
pub const PREFIX_END: Prefix = Prefix::new("end:");
pub const PREFIX_LABEL: Prefix = Prefix::new("label:");
pub const PREFIX_BLOCK: Prefix = Prefix::new("block:");

/// Arguments grouped by prefix. Text before the first prefix is the
/// preamble.
#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value given for `prefix`, in order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }
}

/// Split `args` on the given prefixes. A prefix only counts when it starts
/// the input or follows whitespace, so `username:` does not contain a
/// `name:` argument. Values are trimmed.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(pos, _)| starts_argument(args, *pos))
                .map(move |(pos, _)| (pos, *prefix))
        })
        .collect();
    positions.sort_by_key(|(pos, _)| *pos);

    let preamble_end = positions.first().map(|(pos, _)| *pos).unwrap_or(args.len());
    let mut multimap = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let value_start = pos + prefix.as_str().len();
        let value_end = positions.get(i + 1).map(|(next, _)| *next).unwrap_or(args.len());
        multimap
            .values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    multimap
}

fn starts_argument(args: &str, pos: usize) -> bool {
    pos == 0
        || args[..pos]
            .chars()
            .next_back()
            .is_some_and(char::is_whitespace)
}
