use crate::error::DateError;
use core::cmp::Ordering;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::Serialize;

/// A calendar date at year, month, or day precision, parsed from a compound
/// token of the form `[-]YYYY[-MM[-DD]]`.
///
/// A leading `-` on the token is an era marker for the year, not an
/// arithmetic sign on the whole token. Year zero does not exist. If `day` is
/// present, `month` is present and the day is valid for the year and month
/// under the proleptic Gregorian leap-year rule.
///
/// # Examples
///
/// ```
/// use cpicheck::CompoundDate;
///
/// let date: CompoundDate = "2020-05-06".parse().unwrap();
/// assert_eq!(
///     date,
///     CompoundDate { year: 2020, month: Some(5), day: Some(6) }
/// );
///
/// let year_only: CompoundDate = "-0123".parse().unwrap();
/// assert_eq!(year_only, CompoundDate { year: -123, month: None, day: None });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompoundDate {
    /// The year. Never zero. Negative years are BCE.
    pub year: i64,

    /// The month, `1` through `12`, if the token carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// The day of the month, if the token carried one. Only present when
    /// `month` is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
}

/// Returns whether `year` is a leap year under the proleptic Gregorian rule:
/// divisible by 4, except centuries not divisible by 400.
///
/// The rule is applied to the signed year directly, so year `-2020` is a leap
/// year just as `2020` is.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if `month` is
/// not in `[1, 12]`.
pub fn days_in_month(year: i64, month: u32) -> Option<u32> {
    const DAYS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    match month {
        2 if is_leap_year(year) => Some(29),
        1..=12 => Some(DAYS[(month - 1) as usize]),
        _ => None,
    }
}

impl FromStr for CompoundDate {
    type Err = DateError;

    /// Parses a compound-date token.
    ///
    /// The grammar is `[-]YYYY[-MM[-DD]]`: a year, optionally a month,
    /// optionally a day, dash-separated. Leading zeros are insignificant
    /// (`"0765"` is year 765) and one- or two-digit months and days are
    /// accepted.
    ///
    /// # Errors
    ///
    /// The error paths are mutually exclusive and checked in order; the first
    /// applicable one is returned:
    ///
    /// - [`DateError::MalformedShape`] if the token has more than three
    ///   dash-separated fields (after the era sign is stripped).
    /// - [`DateError::InvalidCharacters`] if any field is empty or holds a
    ///   non-digit.
    /// - [`DateError::YearZero`] if the year is zero, `-0` included.
    /// - [`DateError::MonthOutOfRange`] if the month is not in `[1, 12]`.
    /// - [`DateError::DayOutOfRange`] if the day is not valid for the year
    ///   and month.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        // The era sign must come off before splitting, or it would be counted
        // as an empty leading field.
        let (negative, magnitude) = match token.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, token),
        };
        let fields: Vec<&str> = magnitude.split('-').collect();

        if fields.len() > 3 {
            return Err(DateError::MalformedShape {
                token: token.to_owned(),
            });
        }
        if fields
            .iter()
            .any(|field| field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(DateError::InvalidCharacters {
                token: token.to_owned(),
            });
        }

        let year_magnitude: i64 =
            fields[0]
                .parse()
                .map_err(|_| DateError::MalformedShape {
                    token: token.to_owned(),
                })?;
        let year = if negative {
            -year_magnitude
        } else {
            year_magnitude
        };
        if year == 0 {
            return Err(DateError::YearZero {
                token: token.to_owned(),
            });
        }

        let month = match fields.get(1) {
            Some(raw) => {
                let month: u32 = raw.parse().map_err(|_| DateError::MonthOutOfRange {
                    token: token.to_owned(),
                })?;
                if !(1..=12).contains(&month) {
                    return Err(DateError::MonthOutOfRange {
                        token: token.to_owned(),
                    });
                }
                Some(month)
            }
            None => None,
        };

        let day = match (fields.get(2), month) {
            (Some(raw), Some(month)) => {
                let day: u32 = raw.parse().map_err(|_| DateError::DayOutOfRange {
                    token: token.to_owned(),
                })?;
                let max_day = days_in_month(year, month).unwrap_or(0);
                if !(1..=max_day).contains(&day) {
                    return Err(DateError::DayOutOfRange {
                        token: token.to_owned(),
                    });
                }
                Some(day)
            }
            _ => None,
        };

        Ok(Self { year, month, day })
    }
}

impl PartialOrd for CompoundDate {
    /// Compares two dates by year, then month, then day.
    ///
    /// This is only a partial ordering: once every earlier field is equal, a
    /// field present on one side but missing on the other makes the dates
    /// incomparable. A field missing on both sides ends the comparison as
    /// equal. So `2016` is before `2017-01`, but `2016` and `2016-01` are
    /// incomparable, and in particular neither is after the other.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Equal => {}
            ord => return Some(ord),
        }
        match (self.month, other.month) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return Some(ord),
            },
            (None, None) => return Some(Ordering::Equal),
            _ => return None,
        }
        match (self.day, other.day) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl Display for CompoundDate {
    /// Renders the date back out in its compound form, months and days
    /// zero-padded to two digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year)?;
        if let Some(month) = self.month {
            write!(f, "-{month:02}")?;
        }
        if let Some(day) = self.day {
            write!(f, "-{day:02}")?;
        }
        Ok(())
    }
}
