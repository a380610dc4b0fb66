//! Short code encoding and decoding.
//!
//! Sequence numbers are written as positional numerals over a fixed alphabet,
//! most significant digit first. Every `u64` has exactly one canonical code and
//! every canonical code decodes back to the number it came from.

use thiserror::Error;

/// Digits `0-9`, uppercase and lowercase ASCII letters.
pub const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Base-62 without the easily confused `0`, `O`, `1`, `I` and `l`.
pub const UNAMBIGUOUS_ALPHABET: &str = "23456789ABCDEFGHJKMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marks bytes that are not part of the alphabet in the reverse lookup table.
const NO_DIGIT: u8 = u8::MAX;

/// Errors raised when decoding a short code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCode {
    #[error("short code is empty")]
    Empty,
    #[error("character {character:?} at position {position} is not part of the code alphabet")]
    UnknownCharacter { character: char, position: usize },
    #[error("short code must not start with the zero digit {0:?}")]
    LeadingZero(char),
    #[error("short code is out of the 64-bit range")]
    Overflow,
}

/// Errors raised when building an encoder from a custom alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet needs at least 2 characters, got {0}")]
    TooShort(usize),
    #[error("alphabet contains {0:?} more than once")]
    Duplicate(char),
    #[error("{0:?} is not allowed in short codes")]
    Unsafe(char),
}

/// Bijective mapping between `u64` values and short codes.
///
/// The first alphabet character is the zero digit, so `encode(0)` is that single
/// character. Decoding is strict: characters outside the alphabet, a leading
/// zero digit on a multi-digit code and values past `u64::MAX` are all
/// rejected with [`InvalidCode`] rather than clamped or wrapped.
///
/// # Examples
///
/// ```
/// use seqlink::utils::code_encoder::CodeEncoder;
///
/// let encoder = CodeEncoder::base62();
/// assert_eq!(encoder.encode(61), "z");
/// assert_eq!(encoder.encode(62), "10");
/// assert_eq!(encoder.decode("10"), Ok(62));
/// ```
#[derive(Debug, Clone)]
pub struct CodeEncoder {
    digits: Vec<u8>,
    lookup: [u8; 128],
}

impl CodeEncoder {
    /// Builds an encoder over a custom alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`AlphabetError`] if the alphabet has fewer than two characters,
    /// repeats a character, or contains anything other than `A-Z a-z 0-9 - _ ~`.
    /// `.` is excluded so no code can be the dot segment `.` or `..`.
    pub fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let count = alphabet.chars().count();
        if count < 2 {
            return Err(AlphabetError::TooShort(count));
        }

        let mut seen = [false; 128];
        for c in alphabet.chars() {
            if !is_code_safe(c) {
                return Err(AlphabetError::Unsafe(c));
            }
            let slot = &mut seen[c as usize];
            if *slot {
                return Err(AlphabetError::Duplicate(c));
            }
            *slot = true;
        }

        Ok(Self::from_checked(alphabet.as_bytes()))
    }

    /// Encoder over [`BASE62_ALPHABET`].
    pub fn base62() -> Self {
        Self::from_checked(BASE62_ALPHABET.as_bytes())
    }

    /// Encoder over [`UNAMBIGUOUS_ALPHABET`].
    pub fn unambiguous() -> Self {
        Self::from_checked(UNAMBIGUOUS_ALPHABET.as_bytes())
    }

    fn from_checked(alphabet: &[u8]) -> Self {
        let mut lookup = [NO_DIGIT; 128];
        for (value, &byte) in alphabet.iter().enumerate() {
            lookup[byte as usize] = value as u8;
        }

        Self {
            digits: alphabet.to_vec(),
            lookup,
        }
    }

    /// Number of digits in the alphabet.
    pub fn base(&self) -> u64 {
        self.digits.len() as u64
    }

    /// The alphabet, zero digit first.
    pub fn alphabet(&self) -> &str {
        // Constructors only accept ASCII.
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Encodes a number as a short code.
    pub fn encode(&self, mut n: u64) -> String {
        let base = self.base();
        // 64 digits is enough for u64::MAX in base 2.
        let mut buf = [0u8; 64];
        let mut pos = buf.len();

        loop {
            pos -= 1;
            buf[pos] = self.digits[(n % base) as usize];
            n /= base;
            if n == 0 {
                break;
            }
        }

        buf[pos..].iter().map(|&b| b as char).collect()
    }

    /// Decodes a canonical short code back into its number.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCode`] if the code is empty, contains a character outside
    /// the alphabet, has a leading zero digit, or overflows `u64`.
    pub fn decode(&self, code: &str) -> Result<u64, InvalidCode> {
        let base = self.base();
        let mut value: u64 = 0;

        for (position, character) in code.char_indices() {
            let digit = u8::try_from(character)
                .ok()
                .and_then(|b| self.lookup.get(b as usize).copied())
                .filter(|&d| d != NO_DIGIT)
                .ok_or(InvalidCode::UnknownCharacter {
                    character,
                    position,
                })?;

            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(InvalidCode::Overflow)?;
        }

        match code.as_bytes() {
            [] => Err(InvalidCode::Empty),
            [first, _, ..] if *first == self.digits[0] => {
                Err(InvalidCode::LeadingZero(self.digits[0] as char))
            }
            _ => Ok(value),
        }
    }
}

impl Default for CodeEncoder {
    fn default() -> Self {
        Self::base62()
    }
}

/// RFC 3986 unreserved characters minus `.`.
fn is_code_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '~')
}
