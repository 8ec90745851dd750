//! Helpers shared by the command parsers.

use std::collections::BTreeSet;

use crate::error::{MeetbookError, MeetbookResult};
use crate::event::Block;
use crate::index::Index;
use crate::parser::tokenizer::{ArgumentMultimap, Prefix};
use crate::tag::Tag;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// Parse a one-based index such as `3`.
pub fn parse_index(value: &str) -> MeetbookResult<Index> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or_else(|| MeetbookError::Parse(MESSAGE_INVALID_INDEX.to_string()))
}

/// Parse whitespace-separated one-based indices, dropping repeats.
pub fn parse_indices(value: &str) -> MeetbookResult<BTreeSet<Index>> {
    value.split_whitespace().map(parse_index).collect()
}

pub fn parse_tags(values: &[String]) -> MeetbookResult<BTreeSet<Tag>> {
    values.iter().map(|v| Tag::parse(v)).collect()
}

pub fn parse_blocks(values: &[String]) -> MeetbookResult<Vec<Block>> {
    values.iter().map(|v| Block::parse(v)).collect()
}

/// Fail with the usage message unless every prefix is present.
pub fn require_prefixes(
    args: &ArgumentMultimap,
    prefixes: &[Prefix],
    usage: &str,
) -> MeetbookResult<()> {
    if prefixes.iter().all(|p| args.contains(*p)) {
        Ok(())
    } else {
        Err(MeetbookError::InvalidCommandFormat(usage.to_string()))
    }
}

/// The value of a prefix the caller has already required.
pub fn required_value<'a>(
    args: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &str,
) -> MeetbookResult<&'a str> {
    args.value(prefix)
        .ok_or_else(|| MeetbookError::InvalidCommandFormat(usage.to_string()))
}
