use crate::{Error, Result, Status};
use regex::Regex;
use std::{fmt, str::FromStr, sync::OnceLock};
use tracing::debug;

/// The number of distinct local sums for a 3-cell neighborhood of 3-state cells (0..=6)
pub const SUMS: usize = 7;
/// The number of possible rules, `3^7`
pub const RULE_COUNT: u16 = 3u16.pow(SUMS as u32);
/// The largest valid rule index
pub const MAX_RULE: u16 = RULE_COUNT - 1;

/// A transition table mapping every local sum to the status it produces
///
/// The table is decoded from a rule index by base-3 expansion: the digit at
/// position `i` (units place first) is the new status for local sum `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    index: u16,
    digits: [Status; SUMS],
}

impl RuleTable {
    /// Decodes `index` into its transition table
    ///
    /// Fails with [`Error::InvalidRule`] unless `0 <= index <= 2186`.
    pub fn new(index: i64) -> Result<Self> {
        let Ok(index) = u16::try_from(index) else {
            return Err(Error::InvalidRule(index));
        };
        if index > MAX_RULE {
            return Err(Error::InvalidRule(index.into()));
        }

        let table = Self::decode(index);
        debug!(rule = index, digits = %table, "decoded rule");
        Ok(table)
    }

    fn decode(index: u16) -> Self {
        let mut digits = [Status::Zero; SUMS];
        let mut rest = index;
        for digit in digits.iter_mut() {
            *digit = match rest % 3 {
                0 => Status::Zero,
                1 => Status::One,
                _ => Status::Two,
            };
            rest /= 3;
        }
        Self { index, digits }
    }

    /// Picks a rule uniformly from the whole rule space
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self::decode(rng.random_range(0..RULE_COUNT))
    }

    /// The status a cell takes on when its neighborhood sums to `local_sum`
    ///
    /// # Panics
    /// If `local_sum > 6`, which no 3-cell neighborhood can produce.
    #[inline]
    pub fn lookup(&self, local_sum: u8) -> Status {
        assert!(
            (local_sum as usize) < SUMS,
            "local sum {local_sum} is outside 0..=6"
        );
        self.digits[local_sum as usize]
    }

    #[inline]
    pub fn index(&self) -> u16 {
        self.index
    }

    /// The base-3 digits of the rule, least significant (local sum 0) first
    #[inline]
    pub fn digits(&self) -> &[Status; SUMS] {
        &self.digits
    }
}

/// Writes the ternary "value array", most significant digit first
impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

fn rule_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"^(?:0t([012]{1,7})|(-?\d+))$").expect("valid rule regex"))
}

/// Parses either a decimal rule index (`777`) or a ternary literal (`0t1001210`)
impl FromStr for RuleTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let Some(caps) = rule_pattern().captures(s) else {
            return Err(Error::ParseRule(s.to_owned()));
        };

        if let Some(ternary) = caps.get(1) {
            let index = ternary
                .as_str()
                .bytes()
                .fold(0i64, |acc, b| acc * 3 + i64::from(b - b'0'));
            return Self::new(index);
        }

        let index = caps[2]
            .parse::<i64>()
            .map_err(|_| Error::ParseRule(s.to_owned()))?;
        Self::new(index)
    }
}
