//! Validated scalar values.
//!
//! Every attribute of a record (and the text of a note) is a [`Field`]: a value
//! tagged with its [`FieldKind`]. The kind decides what counts as valid, and the
//! check runs before anything is stored, so a failed [`Field::set`] leaves the
//! previous value in place.
//!
//! | Kind    | Accepts                                   | Error          |
//! |---------|-------------------------------------------|----------------|
//! | `Plain` | anything                                  | never fails    |
//! | `Phone` | exactly 10 ASCII digits                   | `InvalidPhone` |
//! | `Date`  | an ISO calendar date, `YYYY-MM-DD`        | `InvalidDate`  |

use crate::error::{BookError, Result};
use chrono::NaiveDate;
use std::fmt;

pub const PHONE_LEN: usize = 10;
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Plain,
    Phone,
    Date,
}

impl FieldKind {
    /// Checks `raw` against this kind's rules and returns the value to store.
    pub fn validate(self, raw: &str) -> Result<String> {
        match self {
            FieldKind::Plain => Ok(raw.to_string()),
            FieldKind::Phone => {
                if raw.len() == PHONE_LEN && raw.chars().all(|c| c.is_ascii_digit()) {
                    Ok(raw.to_string())
                } else {
                    Err(BookError::InvalidPhone(raw.to_string()))
                }
            }
            FieldKind::Date => parse_date(raw).map(|_| raw.to_string()),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| BookError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    kind: FieldKind,
    value: String,
}

impl Field {
    pub fn new(kind: FieldKind, raw: &str) -> Result<Self> {
        let value = kind.validate(raw)?;
        Ok(Self { kind, value })
    }

    pub fn plain(raw: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Plain,
            value: raw.into(),
        }
    }

    pub fn phone(raw: &str) -> Result<Self> {
        Self::new(FieldKind::Phone, raw)
    }

    pub fn date(raw: &str) -> Result<Self> {
        Self::new(FieldKind::Date, raw)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    /// Replaces the value if `raw` passes validation; otherwise nothing changes.
    pub fn set(&mut self, raw: &str) -> Result<()> {
        self.value = self.kind.validate(raw)?;
        Ok(())
    }

    /// Re-checks the stored value.
    pub fn validate(&self) -> Result<()> {
        self.kind.validate(&self.value).map(|_| ())
    }

    /// The stored value as a date, for `Date` fields.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self.kind {
            FieldKind::Date => parse_date(&self.value).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_ten_digits() {
        for raw in ["0501234567", "0000000000", "9999999999"] {
            let field = Field::phone(raw).unwrap();
            assert_eq!(field.get(), raw);
        }
    }

    #[test]
    fn phone_rejects_wrong_length_or_non_digits() {
        for raw in [
            "",
            "050123456",
            "05012345678",
            "050123456a",
            "+380501234",
            "050 123 45",
            "０５０１２３４５６７",
        ] {
            assert!(
                matches!(Field::phone(raw), Err(BookError::InvalidPhone(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn failed_set_keeps_previous_value() {
        let mut field = Field::phone("0501234567").unwrap();
        assert!(field.set("12345").is_err());
        assert_eq!(field.get(), "0501234567");

        field.set("0991234567").unwrap();
        assert_eq!(field.get(), "0991234567");
    }

    #[test]
    fn date_requires_iso_format() {
        assert!(Field::date("1990-05-01").is_ok());
        assert!(Field::date("2000-02-29").is_ok());
        assert!(matches!(
            Field::date("01.05.1990"),
            Err(BookError::InvalidDate(_))
        ));
        assert!(matches!(
            Field::date("2001-02-29"),
            Err(BookError::InvalidDate(_))
        ));
    }

    #[test]
    fn date_field_exposes_parsed_date() {
        let field = Field::date("1990-05-01").unwrap();
        assert_eq!(field.as_date(), NaiveDate::from_ymd_opt(1990, 5, 1));
        assert_eq!(Field::plain("1990-05-01").as_date(), None);
    }

    #[test]
    fn plain_never_fails() {
        let mut field = Field::plain("Kyiv");
        field.set("").unwrap();
        assert_eq!(field.get(), "");
        assert!(field.validate().is_ok());
    }
}
