//! Low-level bit accessors on a single machine word.
//!
//! Bits are addressed LSB-first: bit 0 is the least-significant bit of the word.
//! None of these functions range-check their arguments in release builds.

/// The machine word every pattern is matched against.
pub type Word = u32;

/// Number of bits in a [Word]; the upper bound on a pattern's length.
pub const WORD_BITS: u32 = Word::BITS;

/// Returns bit `n` of `word`.
#[inline]
pub fn get_bit(word: Word, n: u32) -> bool {
    debug_assert!(n < WORD_BITS);
    (word >> n) & 1 == 1
}

/// Returns `word` with bit `n` set.
#[inline]
pub fn set_bit(word: Word, n: u32) -> Word {
    debug_assert!(n < WORD_BITS);
    word | (1 << n)
}

/// A word with the low `width` bits set. `width` must be in `1..=WORD_BITS`.
#[inline]
pub fn low_mask(width: u32) -> Word {
    debug_assert!(width >= 1 && width <= WORD_BITS);
    Word::MAX >> (WORD_BITS - width)
}

/// Extracts the `width`-bit field of `word` whose most-significant bit is `left`.
#[inline]
pub fn extract_bits(word: Word, left: u32, width: u32) -> Word {
    debug_assert!(left < WORD_BITS && width >= 1 && width <= left + 1);
    (word >> (left + 1 - width)) & low_mask(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bit() {
        let word = 0b1010;
        assert!(!get_bit(word, 0));
        assert!(get_bit(word, 1));
        assert!(get_bit(word, 3));
        assert!(get_bit(0x8000_0000, 31));
    }

    #[test]
    fn test_set_bit() {
        assert_eq!(set_bit(0, 0), 1);
        assert_eq!(set_bit(0b100, 1), 0b110);
        assert_eq!(set_bit(0, 31), 0x8000_0000);
        assert_eq!(set_bit(1, 0), 1);
    }

    #[test]
    fn test_low_mask() {
        assert_eq!(low_mask(1), 1);
        assert_eq!(low_mask(8), 0xFF);
        assert_eq!(low_mask(32), Word::MAX);
    }

    #[test]
    fn test_extract_bits() {
        let word = 0b1101_0110;
        assert_eq!(extract_bits(word, 7, 4), 0b1101);
        assert_eq!(extract_bits(word, 3, 4), 0b0110);
        assert_eq!(extract_bits(word, 0, 1), 0);
        assert_eq!(extract_bits(word, 2, 2), 0b11);
    }

    #[test]
    fn test_extract_full_word() {
        assert_eq!(extract_bits(0xDEAD_BEEF, 31, 32), 0xDEAD_BEEF);
    }
}
