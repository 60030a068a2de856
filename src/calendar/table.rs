use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::calendar::data::{BS_MONTH_DAYS, FIRST_YEAR};
use crate::errors::{CalendarError, Result};
use crate::types::BsDate;

static STANDARD: CalendarTable = CalendarTable {
    first_year: FIRST_YEAR,
    rows: Cow::Borrowed(&BS_MONTH_DAYS),
};

/// year -> twelve month lengths, contiguous from `first_year`
///
/// Read-only once built. Year totals are trusted as curated and never
/// recomputed or checked against 365/366.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarTable {
    first_year: i32,
    rows: Cow<'static, [[u8; 12]]>,
}

impl CalendarTable {
    /// the built-in table shipped with the crate
    pub fn standard() -> &'static CalendarTable {
        &STANDARD
    }

    /// build a custom table; every month length must be positive
    pub fn new(first_year: i32, rows: Vec<[u8; 12]>) -> Result<Self> {
        if rows.is_empty() {
            return Err(CalendarError::InvalidArgument {
                message: "calendar table has no years".to_string(),
            });
        }
        for (offset, row) in rows.iter().enumerate() {
            if let Some(pos) = row.iter().position(|&len| len == 0) {
                return Err(CalendarError::InvalidArgument {
                    message: format!(
                        "year {} month {} has zero days",
                        first_year + offset as i32,
                        pos + 1
                    ),
                });
            }
        }

        Ok(Self {
            first_year,
            rows: Cow::Owned(rows),
        })
    }

    /// parse a `{"2080": [31, 32, ...], ...}` data file; years must be contiguous
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: BTreeMap<i32, [u8; 12]> =
            serde_json::from_str(json).map_err(|e| CalendarError::InvalidArgument {
                message: format!("calendar table json: {}", e),
            })?;

        let first_year = match parsed.keys().next() {
            Some(year) => *year,
            None => {
                return Err(CalendarError::InvalidArgument {
                    message: "calendar table has no years".to_string(),
                })
            }
        };

        let mut rows = Vec::with_capacity(parsed.len());
        for (expected, (year, row)) in (first_year..).zip(parsed) {
            if year != expected {
                return Err(CalendarError::InvalidArgument {
                    message: format!("calendar table skips year {}", expected),
                });
            }
            rows.push(row);
        }

        Self::new(first_year, rows)
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + self.rows.len() as i32 - 1
    }

    pub fn contains_year(&self, year: i32) -> bool {
        year >= self.first_year && year <= self.last_year()
    }

    /// all twelve month lengths for a year
    pub fn months(&self, year: i32) -> Result<&[u8; 12]> {
        if !self.contains_year(year) {
            return Err(CalendarError::UnknownYear { year });
        }
        Ok(&self.rows[(year - self.first_year) as usize])
    }

    /// number of days in a month
    pub fn month_length(&self, year: i32, month: u8) -> Result<u8> {
        let months = self.months(year)?;
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(months[(month - 1) as usize])
    }

    /// sum of the tabulated month lengths
    pub fn year_length(&self, year: i32) -> Result<u32> {
        Ok(self.months(year)?.iter().map(|&d| d as u32).sum())
    }

    /// first tabulated day
    pub fn epoch(&self) -> BsDate {
        BsDate::new(self.first_year, 1, 1)
    }

    /// last tabulated day
    pub fn last_date(&self) -> BsDate {
        let last_year = self.last_year();
        let last_day = self.rows[self.rows.len() - 1][11];
        BsDate::new(last_year, 12, last_day)
    }

    /// check a date, reporting which component is wrong
    pub fn validate(&self, date: &BsDate) -> Result<()> {
        let max = self.month_length(date.year, date.month)?;
        if date.day < 1 || date.day > max {
            return Err(CalendarError::InvalidDay {
                year: date.year,
                month: date.month,
                day: date.day,
                max,
            });
        }
        Ok(())
    }

    pub fn is_valid_date(&self, date: &BsDate) -> bool {
        self.validate(date).is_ok()
    }

    pub(crate) fn rows(&self) -> &[[u8; 12]] {
        &self.rows
    }
}

impl Default for CalendarTable {
    fn default() -> Self {
        STANDARD.clone()
    }
}
