//! Sentinel code points for hashed letters.
//!
//! A few algorithms (Dutch, French, Italian, Portuguese) temporarily replace
//! letters whose vowel/consonant role is ambiguous with a sentinel before
//! running their steps, so that the vowel classes treat them as consonants.
//! The sentinels live in the Unicode private use area and never collide with
//! real input; they are created at pipeline entry and restored at pipeline
//! exit, so they never escape to the caller.
//!
//! One sentinel exists per (letter, case) pair so that unhashing reproduces
//! the original character exactly:
//!
//! | sentinel  | stands for |
//! |-----------|------------|
//! | U+E001    | i          |
//! | U+E002    | I          |
//! | U+E003    | u          |
//! | U+E004    | U          |
//! | U+E005    | y          |
//! | U+E006    | Y          |
//! | U+E007    | Portuguese nasal mark (follows a/o for ã/õ, caseless) |

/// Hashed lower-case `i`.
pub const HASH_I: char = '\u{E001}';
/// Hashed upper-case `I`.
pub const HASH_I_UPPER: char = '\u{E002}';
/// Hashed lower-case `u`.
pub const HASH_U: char = '\u{E003}';
/// Hashed upper-case `U`.
pub const HASH_U_UPPER: char = '\u{E004}';
/// Hashed lower-case `y`.
pub const HASH_Y: char = '\u{E005}';
/// Hashed upper-case `Y`.
pub const HASH_Y_UPPER: char = '\u{E006}';
/// Nasal mark used by the Portuguese pipeline: `ã` is split into `a` plus
/// this mark (and `õ` into `o` plus the mark) so the nasal vowel counts as
/// vowel + consonant during region and suffix work.
pub const NASAL_MARK: char = '\u{E007}';

/// Map a letter to its hashed sentinel, if it has one.
pub fn hashed(c: char) -> Option<char> {
    match c {
        'i' => Some(HASH_I),
        'I' => Some(HASH_I_UPPER),
        'u' => Some(HASH_U),
        'U' => Some(HASH_U_UPPER),
        'y' => Some(HASH_Y),
        'Y' => Some(HASH_Y_UPPER),
        _ => None,
    }
}

/// Map a sentinel back to the letter it stands for.
pub fn unhashed(c: char) -> Option<char> {
    match c {
        HASH_I => Some('i'),
        HASH_I_UPPER => Some('I'),
        HASH_U => Some('u'),
        HASH_U_UPPER => Some('U'),
        HASH_Y => Some('y'),
        HASH_Y_UPPER => Some('Y'),
        _ => None,
    }
}

/// Case-fold a sentinel: upper-case sentinels fold to their lower-case
/// partner, everything else is returned unchanged.
pub fn fold_sentinel(c: char) -> char {
    match c {
        HASH_I_UPPER => HASH_I,
        HASH_U_UPPER => HASH_U,
        HASH_Y_UPPER => HASH_Y,
        _ => c,
    }
}

/// True if `c` is one of the sentinel code points.
pub fn is_sentinel(c: char) -> bool {
    matches!(
        c,
        HASH_I | HASH_I_UPPER | HASH_U | HASH_U_UPPER | HASH_Y | HASH_Y_UPPER | NASAL_MARK
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_unhash_pairs() {
        for c in ['i', 'I', 'u', 'U', 'y', 'Y'] {
            let h = hashed(c).unwrap();
            assert!(is_sentinel(h));
            assert_eq!(unhashed(h), Some(c));
        }
        assert_eq!(hashed('a'), None);
        assert_eq!(unhashed('a'), None);
    }

    #[test]
    fn test_fold_sentinel() {
        assert_eq!(fold_sentinel(HASH_Y_UPPER), HASH_Y);
        assert_eq!(fold_sentinel(HASH_Y), HASH_Y);
        assert_eq!(fold_sentinel('x'), 'x');
    }
}
