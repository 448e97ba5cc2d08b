use crate::error::CurrencyError;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::Serialize;

/// A currency from the supported set. Parsed case-insensitively, rendered
/// (and serialized) as its lower-case three-letter code.
///
/// ```
/// use cpicheck::Currency;
///
/// let currency: Currency = "USD".parse().unwrap();
/// assert_eq!(Currency::Usd, currency);
/// assert_eq!("usd", currency.code());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// Canadian dollar.
    Cad,
}

impl Currency {
    /// All supported currencies.
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Cad];

    /// The lower-case three-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Cad => "cad",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| token.eq_ignore_ascii_case(currency.code()))
            .ok_or_else(|| CurrencyError::Unsupported {
                token: token.to_owned(),
            })
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
