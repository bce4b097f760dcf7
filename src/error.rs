use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The rule index lies outside `0..=2186`.
    #[error("invalid rule #{0}: expected a number in 0-2186")]
    InvalidRule(i64),

    #[error("invalid cell status {0}: expected 0, 1 or 2")]
    InvalidStatus(i64),

    #[error("cannot parse rule from {0:?}")]
    ParseRule(String),
}
