//! Mock order identifier type.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderIdError {
    /// The input does not start with the `ORD` prefix.
    #[error("order id must start with \"ORD\"")]
    MissingPrefix,
    /// The suffix after the prefix has the wrong length.
    #[error("order id must have exactly {expected} characters after the prefix")]
    WrongLength {
        /// Required suffix length.
        expected: usize,
    },
    /// The suffix contains a character outside `[A-Z0-9]`.
    #[error("order id suffix must be uppercase base-36")]
    InvalidCharacter,
}

/// A fabricated order identifier.
///
/// Order ids are the only externally visible trace of a mock checkout: they
/// are generated fresh per receipt and never stored.
///
/// ## Format
///
/// The literal prefix `ORD` followed by exactly 9 uppercase base-36
/// characters, e.g. `ORD7K2QX0A9Z`.
///
/// ## Examples
///
/// ```
/// use gizmo_shack_core::OrderId;
///
/// assert!(OrderId::parse("ORD7K2QX0A9Z").is_ok());
/// assert!(OrderId::parse("ord7k2qx0a9z").is_err()); // lowercase
/// assert!(OrderId::parse("ORD123").is_err());       // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Literal prefix carried by every order id.
    pub const PREFIX: &'static str = "ORD";

    /// Number of random characters after the prefix.
    pub const SUFFIX_LENGTH: usize = 9;

    /// Generate a fresh order id from the given random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(Self::PREFIX.len() + Self::SUFFIX_LENGTH);
        id.push_str(Self::PREFIX);
        for _ in 0..Self::SUFFIX_LENGTH {
            let digit = rng.random_range(0..36);
            // random_range(0..36) is always a valid base-36 digit
            let c = char::from_digit(digit, 36).unwrap_or('0');
            id.push(c.to_ascii_uppercase());
        }
        Self(id)
    }

    /// Parse an `OrderId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Does not start with `ORD`
    /// - Does not have exactly 9 characters after the prefix
    /// - Contains a suffix character outside `[A-Z0-9]`
    pub fn parse(s: &str) -> Result<Self, OrderIdError> {
        let suffix = s.strip_prefix(Self::PREFIX).ok_or(OrderIdError::MissingPrefix)?;

        if suffix.chars().count() != Self::SUFFIX_LENGTH {
            return Err(OrderIdError::WrongLength {
                expected: Self::SUFFIX_LENGTH,
            });
        }

        if !suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        {
            return Err(OrderIdError::InvalidCharacter);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the order id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for OrderId {
    type Err = OrderIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
