//! Elementary rule numbers
//!
//! A rule is an 8-bit lookup table. Written most-significant bit first, the
//! bits give the next state for the neighborhoods `111, 110, ..., 000` in
//! that order, so neighborhood value `N` maps to bit `7 - N` of the written
//! form, which is bit `N` of the integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Numeric base a rule field is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Decimal,
    Hex,
}

impl Radix {
    fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

/// Error produced when parsing a rule number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("rule is empty")]
    Empty,
    #[error("invalid digit in rule '{0}'")]
    InvalidDigit(String),
    #[error("rule {0} is out of range (0-255)")]
    OutOfRange(u64),
}

/// An elementary cellular automaton rule (0-255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(u8);

impl Rule {
    /// Rule 30 - chaotic
    pub const RULE_30: Rule = Rule(30);
    /// Rule 90 - Sierpinski triangle
    pub const RULE_90: Rule = Rule(90);
    /// Rule 110 - Turing complete
    pub const RULE_110: Rule = Rule(110);

    pub const fn new(number: u8) -> Self {
        Self(number)
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Next state for a single neighborhood
    #[inline]
    pub fn output(self, left: bool, center: bool, right: bool) -> bool {
        let index = (left as u8) << 2 | (center as u8) << 1 | (right as u8);
        (self.0 >> index) & 1 == 1
    }

    /// Parse an unprefixed rule field written in `radix`
    ///
    /// Anything outside 0-255 is an error; nothing is clamped here.
    pub fn parse_radix(text: &str, radix: Radix) -> Result<Self, RuleError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RuleError::Empty);
        }
        if !text.chars().all(|c| c.is_digit(radix.base())) {
            return Err(RuleError::InvalidDigit(text.to_string()));
        }
        // Digits are validated above, so only overflow can fail here
        let value = u64::from_str_radix(text, radix.base()).unwrap_or(u64::MAX);
        u8::try_from(value)
            .map(Rule)
            .map_err(|_| RuleError::OutOfRange(value))
    }

    /// The following rule number, wrapping from 255 to 0
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// The preceding rule number, wrapping from 0 to 255
    pub fn previous(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// Eight binary digits, most significant first
    pub fn to_binary(self) -> String {
        format!("{:08b}", self.0)
    }

    /// Uppercase hex without padding
    pub fn to_hex(self) -> String {
        format!("{:X}", self.0)
    }
}

impl From<u8> for Rule {
    fn from(number: u8) -> Self {
        Self(number)
    }
}

impl TryFrom<u32> for Rule {
    type Error = RuleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Rule)
            .map_err(|_| RuleError::OutOfRange(value as u64))
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    /// Accepts `90`, `0b01011010` or `0x5A`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if let Some(bits) = lower.strip_prefix("0b") {
            Self::parse_radix(bits, Radix::Binary)
        } else if let Some(hex) = lower.strip_prefix("0x") {
            Self::parse_radix(hex, Radix::Hex)
        } else {
            Self::parse_radix(s, Radix::Decimal)
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
