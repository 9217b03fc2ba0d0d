//! shiftr: classical Caesar cipher toolkit
//!
//! Transforms text by rotating each letter within its case-respecting
//! 26-letter alphabet:
//! - Encryption shifts letters forward, decryption shifts them back
//! - Anything that is not an ASCII letter passes through untouched
//!
//! ## How it works
//!
//! 1. **Normalize**: any integer shift wraps into `0..26`
//! 2. **Rotate**: each letter moves `shift` positions within its alphabet
//! 3. **Crack**: with only 26 keys, trying all of them recovers plaintext

pub mod cipher;
pub mod crack;

pub use cipher::{decrypt, encrypt, Shift, ALPHABET_LEN, DEFAULT_SHIFT};
pub use crack::{crack, Candidate};
