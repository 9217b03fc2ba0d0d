//! Cipher module: case-respecting alphabet rotation
//!
//! The classical Caesar transform: every ASCII letter moves a fixed number
//! of positions within its own 26-letter alphabet, everything else passes
//! through untouched.

/// Letters in each case-respecting alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Shift applied when the caller does not pick one
pub const DEFAULT_SHIFT: i64 = 3;

/// A rotation amount, normalized into `0..26`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift(u8);

impl Shift {
    /// Build a shift from any integer, wrapping via Euclidean modulo
    pub fn new(raw: i64) -> Self {
        Self(raw.rem_euclid(i64::from(ALPHABET_LEN)) as u8)
    }

    /// The normalized value in `0..=25`
    pub fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one
    pub fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }
}

impl Default for Shift {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

/// Rotate a single character within its case-respecting alphabet
fn rotate(ch: char, by: u8) -> char {
    let base = match ch {
        'A'..='Z' => b'A',
        'a'..='z' => b'a',
        _ => return ch,
    };
    let idx = ch as u8 - base;
    ((idx + by) % ALPHABET_LEN + base) as char
}

/// Encrypt text by rotating each ASCII letter `shift` positions forward
///
/// Character count and order are preserved: only ASCII letters change,
/// and an uppercase letter always maps to an uppercase letter.
pub fn encrypt(text: &str, shift: Shift) -> String {
    text.chars().map(|ch| rotate(ch, shift.value())).collect()
}

/// Decrypt text previously encrypted with `shift`
pub fn decrypt(text: &str, shift: Shift) -> String {
    encrypt(text, shift.inverse())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_normalizes_modulo() {
        assert_eq!(Shift::new(0).value(), 0);
        assert_eq!(Shift::new(26).value(), 0);
        assert_eq!(Shift::new(27).value(), 1);
        assert_eq!(Shift::new(-1).value(), 25);
        assert_eq!(Shift::new(-27).value(), 25);
    }

    #[test]
    fn test_shift_inverse_undoes_shift() {
        assert_eq!(Shift::new(0).inverse().value(), 0);
        assert_eq!(Shift::new(3).inverse().value(), 23);
        assert_eq!(Shift::new(13).inverse().value(), 13);
    }

    #[test]
    fn test_encrypt_shifts_forward() {
        assert_eq!(encrypt("Hello", Shift::new(3)), "Khoor");
        assert_eq!(encrypt("abc", Shift::new(1)), "bcd");
    }

    #[test]
    fn test_encrypt_wraps_alphabet() {
        assert_eq!(encrypt("xyz", Shift::new(3)), "abc");
        assert_eq!(encrypt("XYZ", Shift::new(3)), "ABC");
    }

    #[test]
    fn test_encrypt_full_rotation_is_identity() {
        assert_eq!(encrypt("abc", Shift::new(26)), "abc");
        assert_eq!(encrypt("abc", Shift::new(0)), "abc");
    }

    #[test]
    fn test_encrypt_preserves_case_and_symbols() {
        assert_eq!(
            encrypt("Attack at dawn, 06:00!", Shift::new(5)),
            "Fyyfhp fy ifbs, 06:00!"
        );
    }

    #[test]
    fn test_encrypt_leaves_non_ascii_untouched() {
        assert_eq!(encrypt("café über 東京", Shift::new(7)), "jhmé üily 東京");
    }

    #[test]
    fn test_decrypt_round_trip() {
        let plain = "The quick brown fox jumps over the lazy dog.";
        let shifted = encrypt(plain, Shift::new(19));
        assert_eq!(decrypt(&shifted, Shift::new(19)), plain);
    }

    #[test]
    fn test_negative_shift_equals_wrapped_shift() {
        assert_eq!(
            encrypt("Hello", Shift::new(-3)),
            encrypt("Hello", Shift::new(23))
        );
    }
}
