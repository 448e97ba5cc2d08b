use crate::request::Field;

/// Errors from parsing a single compound-date token.
///
/// The variants are mutually exclusive and checked in declaration order:
/// shape, then characters, then year zero, then month range, then day range.
/// The first applicable one is returned. Each carries the offending token
/// verbatim, as the caller typed it.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The token did not split into 1, 2, or 3 dash-separated fields.
    #[error("[{token}] must be of the form YYYY-MM-DD, YYYY-MM, or YYYY")]
    MalformedShape {
        /// The raw token.
        token: String,
    },

    /// A field held something other than digits (the year may carry a
    /// leading sign, which is stripped before this check).
    #[error("[{token}] contains invalid characters")]
    InvalidCharacters {
        /// The raw token.
        token: String,
    },

    /// The year was zero, including the literal `-0`.
    #[error("[{token}] year must not be zero")]
    YearZero {
        /// The raw token.
        token: String,
    },

    /// The month was outside `[1, 12]`.
    #[error("[{token}] month must be between 1 and 12")]
    MonthOutOfRange {
        /// The raw token.
        token: String,
    },

    /// The day was outside the valid range for the token's year and month.
    #[error("[{token}] has an invalid day for the given month and year")]
    DayOutOfRange {
        /// The raw token.
        token: String,
    },
}

/// Error from parsing a currency-code token.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The token is not in the supported currency set.
    #[error("[{token}] is not a supported currency")]
    Unsupported {
        /// The raw token.
        token: String,
    },
}

/// Errors from parsing an amount token. The numeric-parse check comes before
/// the sign check: a negative-looking token that fails numeric parsing is
/// `NotANumber`, not `NotPositive`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    /// The token did not parse as a finite number.
    #[error("[{token}] is not a number")]
    NotANumber {
        /// The raw token.
        token: String,
    },

    /// The token parsed to a number less than or equal to zero.
    #[error("[{token}] must be greater than zero")]
    NotPositive {
        /// The raw token.
        token: String,
    },
}

/// A request-level validation error, scoped to one field or to the
/// date-ordering rule.
///
/// The content variants prefix the field name onto the token-level message,
/// so a `DateError`'s `[abcd-a] contains invalid characters` is reported as
/// `start_date: [abcd-a] contains invalid characters` here. A request's
/// errors are reported as an ordered list: field order first, the cross-field
/// rule last. See [`RawRequest::validate`](crate::RawRequest::validate).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The field's token was absent or empty.
    #[error("{field} is missing")]
    Missing {
        /// The field with no token.
        field: Field,
    },

    /// A currency field's token failed validation.
    #[error("{field}: {source}")]
    Currency {
        /// The offending field.
        field: Field,
        /// The token-level error.
        source: CurrencyError,
    },

    /// A date field's token failed parsing.
    #[error("{field}: {source}")]
    Date {
        /// The offending field.
        field: Field,
        /// The token-level error.
        source: DateError,
    },

    /// The amount token failed validation.
    #[error("{field}: {source}")]
    Amount {
        /// The offending field.
        field: Field,
        /// The token-level error.
        source: AmountError,
    },

    /// Both dates parsed, but the end date was not strictly after the start.
    #[error("end_date must be after start_date")]
    EndNotAfterStart,
}
