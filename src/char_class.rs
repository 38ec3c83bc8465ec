//! Fixed-membership character classes.
//!
//! Each stemming algorithm is parameterized by a handful of literal character
//! sets: its vowels, its "valid s-ending" consonants, and the occasional
//! single-rule set. The sets enumerate both letter cases explicitly — there
//! is no locale case-folding involved in membership tests.

/// A constant-membership predicate over characters.
///
/// # Examples
///
/// ```
/// use falcata::char_class::CharClass;
///
/// const VOWELS: CharClass = CharClass::new("aeiouAEIOU");
///
/// assert!(VOWELS.contains('a'));
/// assert!(VOWELS.contains('E'));
/// assert!(!VOWELS.contains('x'));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CharClass {
    members: &'static str,
}

impl CharClass {
    /// Create a character class from a literal alphabet string.
    pub const fn new(members: &'static str) -> Self {
        CharClass { members }
    }

    /// Test whether `c` is a member of this class.
    pub fn contains(&self, c: char) -> bool {
        self.members.contains(c)
    }

    /// Test whether `c` is not a member of this class.
    pub fn excludes(&self, c: char) -> bool {
        !self.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DANISH_VOWELS: CharClass = CharClass::new("aeiouyæåøAEIOUYÆÅØ");

    #[test]
    fn test_membership() {
        assert!(DANISH_VOWELS.contains('æ'));
        assert!(DANISH_VOWELS.contains('Ø'));
        assert!(!DANISH_VOWELS.contains('d'));
        assert!(DANISH_VOWELS.excludes('k'));
    }

    #[test]
    fn test_both_cases_listed() {
        // Membership is literal: only the listed forms are members.
        const LOWER_ONLY: CharClass = CharClass::new("aeiou");
        assert!(LOWER_ONLY.contains('a'));
        assert!(!LOWER_ONLY.contains('A'));
    }
}
