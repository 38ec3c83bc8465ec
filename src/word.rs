//! The mutable word buffer and suffix primitives.
//!
//! A [`Word`] is the subject of one stemming call: a decoded code-point
//! buffer that the pipeline mutates in place (deletions, suffix replacement,
//! letter hashing). The suffix primitives defined here are the building
//! blocks every language pipeline composes:
//!
//! - [`Word::ends_with`] — literal suffix match, each position accepting the
//!   upper or lower form of the pattern character,
//! - [`Word::ends_with_in`] — the same, additionally requiring the suffix to
//!   start at or after a region boundary,
//! - [`Word::delete_suffix_in`] / [`Word::delete_longest_in`] — region-gated
//!   deletion, candidates tried in declared order with first match winning,
//! - [`Word::replace_suffix`] — literal replacement of a trailing match.
//!
//! Patterns are written in lower case; matching folds each word character
//! through [`fold`] rather than case-folding the pattern, which realizes the
//! per-character case alternation of the rule tables.

use crate::hash;

/// Case-fold a single character for pattern matching.
///
/// Maps an upper-case letter to its lower-case form (single-character
/// mappings only) and an upper-case sentinel to its lower-case partner.
pub fn fold(c: char) -> char {
    let c = hash::fold_sentinel(c);
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

fn pattern_chars(pattern: &str) -> impl Iterator<Item = char> + '_ {
    pattern.chars()
}

fn pattern_len(pattern: &str) -> usize {
    pattern.chars().count()
}

/// A mutable word buffer owned by one stemming call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    chars: Vec<char>,
}

impl Word {
    /// Create a word buffer from a token.
    pub fn new(text: &str) -> Self {
        Word {
            chars: text.chars().collect(),
        }
    }

    /// Current length in code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at index `i`.
    pub fn char_at(&self, i: usize) -> char {
        self.chars[i]
    }

    /// The characters of the buffer.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The final character, if any.
    pub fn last(&self) -> Option<char> {
        self.chars.last().copied()
    }

    /// Overwrite the character at index `i`.
    pub fn set(&mut self, i: usize, c: char) {
        self.chars[i] = c;
    }

    /// Insert a character at index `i`.
    pub fn insert(&mut self, i: usize, c: char) {
        self.chars.insert(i, c);
    }

    /// Remove and return the character at index `i`.
    pub fn remove(&mut self, i: usize) -> char {
        self.chars.remove(i)
    }

    /// Append a character.
    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Delete the last `n` characters.
    pub fn truncate_by(&mut self, n: usize) {
        let len = self.chars.len().saturating_sub(n);
        self.chars.truncate(len);
    }

    /// Strip leading and trailing punctuation from the buffer.
    pub fn trim_punctuation(&mut self) {
        while matches!(self.chars.last(), Some(&c) if !c.is_alphanumeric()) {
            self.chars.pop();
        }
        let lead = self
            .chars
            .iter()
            .take_while(|c| !c.is_alphanumeric())
            .count();
        if lead > 0 {
            self.chars.drain(..lead);
        }
    }

    /// True if the buffer starts with `pattern` (case-pair match).
    pub fn starts_with(&self, pattern: &str) -> bool {
        let n = pattern_len(pattern);
        if n > self.chars.len() {
            return false;
        }
        self.chars[..n]
            .iter()
            .zip(pattern_chars(pattern))
            .all(|(&c, p)| fold(c) == p)
    }

    /// True if the buffer ends with `pattern` (case-pair match).
    pub fn ends_with(&self, pattern: &str) -> bool {
        let n = pattern_len(pattern);
        if n > self.chars.len() {
            return false;
        }
        let start = self.chars.len() - n;
        self.chars[start..]
            .iter()
            .zip(pattern_chars(pattern))
            .all(|(&c, p)| fold(c) == p)
    }

    /// True if the buffer ends with `pattern` and the match starts at or
    /// after `boundary`.
    pub fn ends_with_in(&self, pattern: &str, boundary: usize) -> bool {
        let n = pattern_len(pattern);
        n <= self.chars.len() && self.chars.len() - n >= boundary && self.ends_with(pattern)
    }

    /// Delete `pattern` from the end of the buffer if it matches.
    pub fn delete_suffix(&mut self, pattern: &str) -> bool {
        if self.ends_with(pattern) {
            self.truncate_by(pattern_len(pattern));
            true
        } else {
            false
        }
    }

    /// Delete `pattern` from the end of the buffer if it matches at or after
    /// `boundary`.
    pub fn delete_suffix_in(&mut self, pattern: &str, boundary: usize) -> bool {
        if self.ends_with_in(pattern, boundary) {
            self.truncate_by(pattern_len(pattern));
            true
        } else {
            false
        }
    }

    /// Try the candidate suffixes in declared order (tables list them
    /// longest first) and delete the first one that matches at or after
    /// `boundary`. A candidate rejected by the boundary test does not end
    /// the search; shorter candidates are still tried.
    pub fn delete_longest_in(&mut self, patterns: &[&str], boundary: usize) -> bool {
        for pattern in patterns {
            if self.delete_suffix_in(pattern, boundary) {
                return true;
            }
        }
        false
    }

    /// Replace a trailing `pattern` match with `replacement`.
    pub fn replace_suffix(&mut self, pattern: &str, replacement: &str) -> bool {
        if self.ends_with(pattern) {
            self.truncate_by(pattern_len(pattern));
            self.chars.extend(replacement.chars());
            true
        } else {
            false
        }
    }

    /// Replace a trailing `pattern` match with `replacement` if the match
    /// starts at or after `boundary`.
    pub fn replace_suffix_in(&mut self, pattern: &str, replacement: &str, boundary: usize) -> bool {
        if self.ends_with_in(pattern, boundary) {
            self.truncate_by(pattern_len(pattern));
            self.chars.extend(replacement.chars());
            true
        } else {
            false
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_pair_matching() {
        let w = Word::new("Dokumentation");
        assert!(w.ends_with("ation"));
        assert!(w.starts_with("dok"));

        let w = Word::new("INTÉGRAL");
        assert!(w.ends_with("égral"));
    }

    #[test]
    fn test_ends_with_in_boundary() {
        let w = Word::new("friendly");
        // "ly" starts at offset 6
        assert!(w.ends_with_in("ly", 6));
        assert!(!w.ends_with_in("ly", 7));
        assert!(!w.ends_with_in("friendlyly", 0));
    }

    #[test]
    fn test_delete_longest_in_prefers_order() {
        let mut w = Word::new("huset");
        // "et" is listed before "t", so the longer candidate wins.
        assert!(w.delete_longest_in(&["et", "t"], 0));
        assert_eq!(w.to_string(), "hus");
    }

    #[test]
    fn test_region_failure_falls_through() {
        let mut w = Word::new("bilen");
        // "ilen" starts at offset 1, rejected by boundary 3; "en" starts at
        // offset 3 and is accepted.
        assert!(w.delete_longest_in(&["ilen", "en"], 3));
        assert_eq!(w.to_string(), "bil");
    }

    #[test]
    fn test_replace_suffix() {
        let mut w = Word::new("løst");
        assert!(w.replace_suffix("løst", "løs"));
        assert_eq!(w.to_string(), "løs");
        assert!(!w.replace_suffix("xyz", "a"));
    }

    #[test]
    fn test_trim_punctuation() {
        let mut w = Word::new("\"huset!\"");
        w.trim_punctuation();
        assert_eq!(w.to_string(), "huset");

        let mut w = Word::new("...");
        w.trim_punctuation();
        assert!(w.is_empty());
    }
}
