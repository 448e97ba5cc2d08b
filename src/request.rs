use crate::amount::Amount;
use crate::currency::Currency;
use crate::date::CompoundDate;
use crate::error::RequestError;
use core::cmp::Ordering;
use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

/// The five logical request fields, in their fixed validation (and error
/// reporting) order. Displays as the wire-level field name, e.g.
/// `start_currency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The currency of the amount at the start date.
    StartCurrency,
    /// The currency to express the result in.
    EndCurrency,
    /// The date the amount is valued at.
    StartDate,
    /// The date to revalue the amount at.
    EndDate,
    /// The monetary amount.
    Amount,
}

impl Field {
    /// The wire-level field name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::StartCurrency => "start_currency",
            Field::EndCurrency => "end_currency",
            Field::StartDate => "start_date",
            Field::EndDate => "end_date",
            Field::Amount => "amount",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The raw tokens of an incoming request, prior to any validation. Absent and
/// empty tokens are equivalent. Constructed per request and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRequest {
    /// Raw `start_currency` token.
    pub start_currency: Option<String>,
    /// Raw `end_currency` token.
    pub end_currency: Option<String>,
    /// Raw `start_date` token.
    pub start_date: Option<String>,
    /// Raw `end_date` token.
    pub end_date: Option<String>,
    /// Raw `amount` token.
    pub amount: Option<String>,
}

/// A fully validated request. Constructed atomically by
/// [`RawRequest::validate`]: it exists only when every field validated and
/// the end date is strictly after the start date.
///
/// Serializes with camelCase keys, matching the success body handed back to
/// callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRequest {
    /// The normalized start currency.
    pub start_currency: Currency,
    /// The normalized end currency.
    pub end_currency: Currency,
    /// The normalized start date.
    pub start_date: CompoundDate,
    /// The normalized end date.
    pub end_date: CompoundDate,
    /// The normalized amount.
    pub amount: Amount,
}

/// The failure body handed back to callers: a fixed message and the ordered
/// error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Fixed human-readable summary.
    pub message: &'static str,
    /// One rendered message per validation error, in field order.
    pub errors: Vec<String>,
}

impl From<Vec<RequestError>> for ErrorResponse {
    fn from(errors: Vec<RequestError>) -> Self {
        Self {
            message: "There was an error with the request",
            errors: errors.iter().map(ToString::to_string).collect(),
        }
    }
}

impl RawRequest {
    /// Validates all five fields and the date-ordering rule, collecting every
    /// failure.
    ///
    /// Unlike the per-token parsers, this never stops at the first problem:
    /// each field is validated independently, in the fixed order
    /// `start_currency`, `end_currency`, `start_date`, `end_date`, `amount`,
    /// and every error is appended to one list so the caller sees all of them
    /// in a single response. The cross-field rule (`end_date` strictly after
    /// `start_date` under [`CompoundDate`]'s partial order) runs only when
    /// both dates parsed, and its error always comes last.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpicheck::RawRequest;
    ///
    /// let request = RawRequest {
    ///     start_currency: Some("USD".into()),
    ///     end_currency: Some("USD".into()),
    ///     start_date: Some("2019-01".into()),
    ///     end_date: Some("2020-02".into()),
    ///     amount: Some("100".into()),
    /// };
    /// let validated = request.validate().unwrap();
    /// assert_eq!("usd", validated.start_currency.code());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the non-empty, ordered list of [`RequestError`]s when any
    /// field (or the ordering rule) fails.
    pub fn validate(&self) -> Result<ValidatedRequest, Vec<RequestError>> {
        let mut errors = Vec::new();

        let start_currency = collect(&mut errors, self.currency(Field::StartCurrency));
        let end_currency = collect(&mut errors, self.currency(Field::EndCurrency));
        let start_date = collect(&mut errors, self.date(Field::StartDate));
        let end_date = collect(&mut errors, self.date(Field::EndDate));
        let amount = collect(&mut errors, self.amount_value());

        // The ordering rule only makes sense over two well-formed dates; a
        // malformed date must not also draw an ordering error.
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end.partial_cmp(&start) != Some(Ordering::Greater) {
                errors.push(RequestError::EndNotAfterStart);
            }
        }

        match (start_currency, end_currency, start_date, end_date, amount) {
            (Some(start_currency), Some(end_currency), Some(start_date), Some(end_date), Some(amount))
                if errors.is_empty() =>
            {
                Ok(ValidatedRequest {
                    start_currency,
                    end_currency,
                    start_date,
                    end_date,
                    amount,
                })
            }
            _ => Err(errors),
        }
    }

    fn token(&self, field: Field) -> Result<&str, RequestError> {
        let token = match field {
            Field::StartCurrency => &self.start_currency,
            Field::EndCurrency => &self.end_currency,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::Amount => &self.amount,
        };
        match token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(RequestError::Missing { field }),
        }
    }

    fn currency(&self, field: Field) -> Result<Currency, RequestError> {
        self.token(field)?
            .parse()
            .map_err(|source| RequestError::Currency { field, source })
    }

    fn date(&self, field: Field) -> Result<CompoundDate, RequestError> {
        self.token(field)?
            .parse()
            .map_err(|source| RequestError::Date { field, source })
    }

    fn amount_value(&self) -> Result<Amount, RequestError> {
        let field = Field::Amount;
        self.token(field)?
            .parse()
            .map_err(|source| RequestError::Amount { field, source })
    }
}

/// Moves an error, if any, onto the list, keeping the success value
/// otherwise. The two-tier discipline in one place: fields short-circuit
/// internally, the request does not.
fn collect<T>(errors: &mut Vec<RequestError>, result: Result<T, RequestError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            errors.push(error);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(
        start_currency: Option<&str>,
        end_currency: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
        amount: Option<&str>,
    ) -> RawRequest {
        RawRequest {
            start_currency: start_currency.map(str::to_owned),
            end_currency: end_currency.map(str::to_owned),
            start_date: start_date.map(str::to_owned),
            end_date: end_date.map(str::to_owned),
            amount: amount.map(str::to_owned),
        }
    }

    fn messages(request: &RawRequest) -> Vec<String> {
        request
            .validate()
            .unwrap_err()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_valid_request() {
        let validated = request(
            Some("USD"),
            Some("USD"),
            Some("2019-01"),
            Some("2020-02"),
            Some("100"),
        )
        .validate()
        .unwrap();

        assert_eq!(Currency::Usd, validated.start_currency);
        assert_eq!(Currency::Usd, validated.end_currency);
        assert_eq!("2019-01".parse(), Ok(validated.start_date));
        assert_eq!("2020-02".parse(), Ok(validated.end_date));
        assert_eq!(100.0, *validated.amount);
    }

    #[test]
    fn test_all_fields_absent() {
        let expected = vec![
            "start_currency is missing",
            "end_currency is missing",
            "start_date is missing",
            "end_date is missing",
            "amount is missing",
        ];
        assert_eq!(expected, messages(&RawRequest::default()));
    }

    /// Empty tokens count as missing, same as absent ones.
    #[test]
    fn test_all_fields_empty() {
        let req = request(Some(""), Some(""), Some(""), Some(""), Some(""));
        let expected = vec![
            "start_currency is missing",
            "end_currency is missing",
            "start_date is missing",
            "end_date is missing",
            "amount is missing",
        ];
        assert_eq!(expected, messages(&req));
    }

    /// Every field fails on content, so there is one error per field in field
    /// order, and no ordering error since neither date parsed.
    #[test]
    fn test_every_field_bad() {
        let req = request(
            Some("US"),
            Some("U"),
            Some("abcd-a"),
            Some("2020/01"),
            Some("-2.0"),
        );
        let expected = vec![
            "start_currency: [US] is not a supported currency",
            "end_currency: [U] is not a supported currency",
            "start_date: [abcd-a] contains invalid characters",
            "end_date: [2020/01] contains invalid characters",
            "amount: [-2.0] must be greater than zero",
        ];
        assert_eq!(expected, messages(&req));
    }

    #[rstest]
    #[case(Some("US"), Some("USD"), "start_currency: [US] is not a supported currency")]
    #[case(Some("USD"), Some("AA"), "end_currency: [AA] is not a supported currency")]
    fn test_single_bad_currency(
        #[case] start_currency: Option<&str>,
        #[case] end_currency: Option<&str>,
        #[case] expected: &str,
    ) {
        let req = request(
            start_currency,
            end_currency,
            Some("2000-01"),
            Some("2020-05"),
            Some("1.0"),
        );
        assert_eq!(vec![expected.to_owned()], messages(&req));
    }

    #[rstest]
    #[case("200-1-2-3", "start_date: [200-1-2-3] must be of the form YYYY-MM-DD, YYYY-MM, or YYYY")]
    #[case("200A-01", "start_date: [200A-01] contains invalid characters")]
    #[case("2001-A1", "start_date: [2001-A1] contains invalid characters")]
    #[case("2001-00", "start_date: [2001-00] month must be between 1 and 12")]
    #[case("2001-13", "start_date: [2001-13] month must be between 1 and 12")]
    #[case("0000-12", "start_date: [0000-12] year must not be zero")]
    fn test_bad_start_date(#[case] token: &str, #[case] expected: &str) {
        let req = request(
            Some("USD"),
            Some("USD"),
            Some(token),
            Some("2020-01"),
            Some("1.0"),
        );
        assert_eq!(vec![expected.to_owned()], messages(&req));
    }

    #[rstest]
    #[case("202-1-1-1", "end_date: [202-1-1-1] must be of the form YYYY-MM-DD, YYYY-MM, or YYYY")]
    #[case("20F0-01", "end_date: [20F0-01] contains invalid characters")]
    #[case("2020-A1", "end_date: [2020-A1] contains invalid characters")]
    #[case("2020-00", "end_date: [2020-00] month must be between 1 and 12")]
    #[case("2020-13", "end_date: [2020-13] month must be between 1 and 12")]
    #[case("0000-01", "end_date: [0000-01] year must not be zero")]
    fn test_bad_end_date(#[case] token: &str, #[case] expected: &str) {
        let req = request(
            Some("USD"),
            Some("USD"),
            Some("1000-12"),
            Some(token),
            Some("1.0"),
        );
        assert_eq!(vec![expected.to_owned()], messages(&req));
    }

    #[rstest]
    #[case("abd", "amount: [abd] is not a number")]
    #[case("-1", "amount: [-1] must be greater than zero")]
    fn test_bad_amount(#[case] token: &str, #[case] expected: &str) {
        let req = request(
            Some("USD"),
            Some("USD"),
            Some("2000-12"),
            Some("2020-01"),
            Some(token),
        );
        assert_eq!(vec![expected.to_owned()], messages(&req));
    }

    /// An end date equal to or earlier than the start date, at any
    /// granularity, yields exactly the single ordering error.
    #[rstest]
    #[case("2016", "2015")] // earlier year
    #[case("2016-02", "2016-01")] // earlier month
    #[case("2016-02-02", "2016-02-01")] // earlier day
    #[case("2016-02", "2016-02")] // equal
    #[case("2016", "2016-05")] // incomparable precision
    fn test_end_not_after_start(#[case] start: &str, #[case] end: &str) {
        let req = request(Some("USD"), Some("USD"), Some(start), Some(end), Some("100"));
        assert_eq!(
            vec!["end_date must be after start_date".to_owned()],
            messages(&req)
        );
    }

    /// The ordering rule is skipped when either date failed to parse: no
    /// misleading ordering error on top of a parse error.
    #[test]
    fn test_ordering_rule_skipped_on_bad_date() {
        let req = request(
            Some("USD"),
            Some("USD"),
            Some("2020-99"),
            Some("2019-01"),
            Some("100"),
        );
        assert_eq!(
            vec!["start_date: [2020-99] month must be between 1 and 12".to_owned()],
            messages(&req)
        );
    }

    #[test]
    fn test_success_body_shape() {
        let validated = request(
            Some("CAD"),
            Some("CAD"),
            Some("2010-03"),
            Some("2019-03"),
            Some("100"),
        )
        .validate()
        .unwrap();

        assert_eq!(
            serde_json::json!({
                "startCurrency": "cad",
                "endCurrency": "cad",
                "startDate": {"year": 2010, "month": 3},
                "endDate": {"year": 2019, "month": 3},
                "amount": 100.0,
            }),
            serde_json::to_value(validated).unwrap()
        );
    }

    #[test]
    fn test_error_body_shape() {
        let errors = RawRequest::default().validate().unwrap_err();
        let body = ErrorResponse::from(errors);
        assert_eq!(
            serde_json::json!({
                "message": "There was an error with the request",
                "errors": [
                    "start_currency is missing",
                    "end_currency is missing",
                    "start_date is missing",
                    "end_date is missing",
                    "amount is missing",
                ],
            }),
            serde_json::to_value(body).unwrap()
        );
    }

    #[test]
    fn test_deserialize_raw_request() {
        let raw: RawRequest = serde_json::from_value(serde_json::json!({
            "start_currency": "USD",
            "amount": "100",
        }))
        .unwrap();
        assert_eq!(Some("USD"), raw.start_currency.as_deref());
        assert_eq!(None, raw.start_date);
    }
}
