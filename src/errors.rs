use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("unknown year: {year} is not in the calendar table")]
    UnknownYear {
        year: i32,
    },

    #[error("invalid month: {month} (expected 1..=12)")]
    InvalidMonth {
        month: u8,
    },

    #[error("invalid day: {year}-{month:02}-{day:02} (month has {max} days)")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max: u8,
    },

    #[error("day index {index} falls outside the tabulated years")]
    OutOfTableRange {
        index: i64,
    },

    #[error("gregorian date {date} maps outside the tabulated years")]
    AdOutOfTableRange {
        date: NaiveDate,
    },

    #[error("arithmetic overflow: {message}")]
    Overflow {
        message: String,
    },

    #[error("invalid argument: {message}")]
    InvalidArgument {
        message: String,
    },

    #[error("cannot parse date {input:?}: {message}")]
    ParseError {
        input: String,
        message: String,
    },
}

impl CalendarError {
    /// true for any variant that means "outside the table"
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CalendarError::UnknownYear { .. }
                | CalendarError::OutOfTableRange { .. }
                | CalendarError::AdOutOfTableRange { .. }
        )
    }
}

/// overflow error for a named calculation step
pub(crate) fn overflow(step: &str) -> CalendarError {
    CalendarError::Overflow {
        message: format!("{} exceeds the decimal range", step),
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
