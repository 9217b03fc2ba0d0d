//! Crack module: exhaustive recovery of Caesar plaintext
//!
//! A Caesar cipher has only 26 possible keys, so "cracking" is trying all
//! of them. Every shift is returned in order; picking the readable one is
//! left to the caller.

use crate::cipher::{decrypt, Shift, ALPHABET_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One brute-force result: a shift and the text it decrypts to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Shift that was tried (0-25)
    pub shift: u8,
    /// Text obtained by decrypting with that shift
    pub plaintext: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shift {:>2}: {}", self.shift, self.plaintext)
    }
}

/// Decrypt `text` under every possible shift, ascending from 0
///
/// Shift 0 reproduces the input unchanged; when the input really is a
/// Caesar ciphertext, exactly one candidate holds the plaintext.
pub fn crack(text: &str) -> Vec<Candidate> {
    (0..ALPHABET_LEN)
        .map(|shift| Candidate {
            shift,
            plaintext: decrypt(text, Shift::new(i64::from(shift))),
        })
        .collect()
}
