//! # cpicheck
//!
//! Parsing and validation for inflation-calculation requests.
//!
//! The crate turns the loosely-formatted inputs of such a request (two
//! calendar dates, two currency codes, and a monetary amount, all raw
//! strings) into either a fully normalized [`ValidatedRequest`] or a
//! complete, ordered list of human-readable errors. It does not fetch CPI
//! data or compute the inflation itself; it is the input boundary in front
//! of that computation.
//!
//! ## Compound dates
//!
//! Dates are *compound*: a token of the form `[-]YYYY[-MM[-DD]]`, so a
//! request can be precise to a year, a month, or a day. A leading `-` marks
//! a BCE year (an era marker, not arithmetic), leading zeros are
//! insignificant, and there is no year zero. Day values are checked against
//! the real calendar, proleptic Gregorian leap years included.
//!
//! ```
//! use cpicheck::prelude::*;
//!
//! let date: CompoundDate = "2016-02-29".parse().unwrap();
//! assert_eq!(Some(29), date.day);
//!
//! let err = "1900-02-29".parse::<CompoundDate>().unwrap_err();
//! assert_eq!(
//!     "[1900-02-29] has an invalid day for the given month and year",
//!     err.to_string()
//! );
//! ```
//!
//! ## Two-tier error discipline
//!
//! Each token parser stops at its first problem, since a token has only one
//! value to report. The request validator never does: all five fields are checked
//! independently, in a fixed order, and every failure lands in one list, so
//! a caller sees all of their mistakes in a single response.
//!
//! ```
//! use cpicheck::prelude::*;
//!
//! let request = RawRequest {
//!     start_currency: Some("US".into()),
//!     end_currency: Some("USD".into()),
//!     start_date: Some("2019-01".into()),
//!     end_date: Some("2020-02".into()),
//!     amount: Some("abc".into()),
//! };
//! let errors = request.validate().unwrap_err();
//! let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
//! assert_eq!(
//!     vec![
//!         "start_currency: [US] is not a supported currency".to_owned(),
//!         "amount: [abc] is not a number".to_owned(),
//!     ],
//!     messages
//! );
//! ```
//!
//! The cross-field rule (the end date must be strictly after the start
//! date) runs only once both dates have parsed, so a malformed date is
//! never compounded with a misleading ordering error.
//!
//! Everything here is a pure function over its inputs: no I/O, no shared
//! state, nothing to synchronize. Validating requests in parallel needs no
//! coordination.
#![warn(missing_docs)]

mod amount;
mod currency;
mod date;
mod error;
mod request;

pub use crate::amount::Amount;
pub use crate::currency::Currency;
pub use crate::date::{days_in_month, is_leap_year, CompoundDate};
pub use crate::error::{AmountError, CurrencyError, DateError, RequestError};
pub use crate::request::{ErrorResponse, Field, RawRequest, ValidatedRequest};

/// A convenience module appropriate for glob imports (`use cpicheck::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Amount;
    #[doc(no_inline)]
    pub use crate::AmountError;
    #[doc(no_inline)]
    pub use crate::CompoundDate;
    #[doc(no_inline)]
    pub use crate::Currency;
    #[doc(no_inline)]
    pub use crate::CurrencyError;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::ErrorResponse;
    #[doc(no_inline)]
    pub use crate::Field;
    #[doc(no_inline)]
    pub use crate::RawRequest;
    #[doc(no_inline)]
    pub use crate::RequestError;
    #[doc(no_inline)]
    pub use crate::ValidatedRequest;
}
