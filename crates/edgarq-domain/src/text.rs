//! Text matching primitives shared by the query parser and the analyzers
//!
//! Lowercasing is ASCII-only so that a byte offset found in the lowered text
//! is a valid offset into the original.

use serde::{Deserialize, Serialize};

/// How a keyword must sit in the text to count as a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Any literal occurrence, even inside a longer word
    #[default]
    Substring,
    /// Occurrence must begin at a word boundary (suffixes still allowed)
    WordStart,
}

/// ASCII-lowercased copy of `text`
pub fn lower(text: &str) -> String {
    text.to_ascii_lowercase()
}

/// Byte offset of the first hit of `needle` in `haystack`
///
/// Both arguments are expected to be lowercased already.
pub fn find(haystack: &str, needle: &str, mode: MatchMode) -> Option<usize> {
    if needle.is_empty() {
        return None;
    }
    match mode {
        MatchMode::Substring => haystack.find(needle),
        MatchMode::WordStart => haystack
            .match_indices(needle)
            .map(|(i, _)| i)
            .find(|&i| starts_word(haystack, i)),
    }
}

/// Whether `needle` occurs in `haystack`
pub fn contains(haystack: &str, needle: &str, mode: MatchMode) -> bool {
    find(haystack, needle, mode).is_some()
}

/// Number of non-overlapping hits of `needle` in `haystack`
pub fn count(haystack: &str, needle: &str, mode: MatchMode) -> usize {
    if needle.is_empty() {
        return 0;
    }
    match mode {
        MatchMode::Substring => haystack.matches(needle).count(),
        MatchMode::WordStart => haystack
            .match_indices(needle)
            .filter(|(i, _)| starts_word(haystack, *i))
            .count(),
    }
}

fn starts_word(haystack: &str, at: usize) -> bool {
    haystack[..at]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// Slice of `text` from `before` characters ahead of a hit to `after`
/// characters past it
///
/// `pos`/`len` are byte offsets locating the hit. A hit that splits a
/// character is widened to whole characters, and both ends are clamped to
/// the text, so this never panics.
pub fn window(text: &str, pos: usize, len: usize, before: usize, after: usize) -> &str {
    let hit_start = floor_boundary(text, pos);
    let hit_end = ceil_boundary(text, pos.saturating_add(len)).max(hit_start);

    let start = if before == 0 {
        hit_start
    } else {
        text[..hit_start]
            .char_indices()
            .rev()
            .nth(before - 1)
            .map_or(0, |(idx, _)| idx)
    };
    let end = text[hit_end..]
        .char_indices()
        .nth(after)
        .map_or(text.len(), |(idx, _)| hit_end + idx);

    &text[start..end]
}

fn floor_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fn ceil_boundary(text: &str, at: usize) -> usize {
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at += 1;
    }
    at
}

/// Collapse every whitespace run to a single space and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first letter of each word, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
