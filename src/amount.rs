use crate::error::AmountError;
use core::fmt::{self, Display};
use core::ops::Deref;
use core::str::FromStr;
use serde::Serialize;

/// A monetary amount: a finite number strictly greater than zero.
///
/// ```
/// use cpicheck::Amount;
///
/// let amount: Amount = "100".parse().unwrap();
/// assert_eq!(100.0, *amount);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl FromStr for Amount {
    type Err = AmountError;

    /// Parses an amount token. The numeric check comes first: a token that
    /// fails `f64` parsing (or parses to a non-finite value, like `inf` or
    /// `NaN`) is [`AmountError::NotANumber`], and only a successfully parsed
    /// value that is zero or negative is [`AmountError::NotPositive`].
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let value: f64 = token.parse().map_err(|_| AmountError::NotANumber {
            token: token.to_owned(),
        })?;
        if !value.is_finite() {
            return Err(AmountError::NotANumber {
                token: token.to_owned(),
            });
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive {
                token: token.to_owned(),
            });
        }
        Ok(Self(value))
    }
}

impl Deref for Amount {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
