use tracing::trace;

use crate::calendar::CalendarTable;
use crate::errors::{CalendarError, Result};
use crate::types::BsDate;

impl CalendarTable {
    /// days since the first tabulated day (epoch = index 0)
    pub fn to_index(&self, date: &BsDate) -> Result<i64> {
        self.validate(date)?;

        let whole_years: i64 = self.rows()[..(date.year - self.first_year()) as usize]
            .iter()
            .flat_map(|row| row.iter())
            .map(|&d| d as i64)
            .sum();

        let whole_months: i64 = self.months(date.year)?[..(date.month - 1) as usize]
            .iter()
            .map(|&d| d as i64)
            .sum();

        Ok(whole_years + whole_months + date.day as i64 - 1)
    }

    /// inverse of [`CalendarTable::to_index`]
    pub fn from_index(&self, index: i64) -> Result<BsDate> {
        if index < 0 {
            return Err(CalendarError::OutOfTableRange { index });
        }

        let mut remaining = index;
        for (offset, row) in self.rows().iter().enumerate() {
            let year_length: i64 = row.iter().map(|&d| d as i64).sum();
            if remaining >= year_length {
                remaining -= year_length;
                continue;
            }

            for (m, &len) in row.iter().enumerate() {
                let len = len as i64;
                if remaining < len {
                    return Ok(BsDate::new(
                        self.first_year() + offset as i32,
                        m as u8 + 1,
                        remaining as u8 + 1,
                    ));
                }
                remaining -= len;
            }
        }

        trace!(index, "day index past the last tabulated year");
        Err(CalendarError::OutOfTableRange { index })
    }

    /// signed day count from `start` to `end`
    pub fn days_between(&self, start: &BsDate, end: &BsDate) -> Result<i64> {
        Ok(self.to_index(end)? - self.to_index(start)?)
    }

    /// shift a date by a signed number of days
    pub fn add_days(&self, date: &BsDate, days: i64) -> Result<BsDate> {
        self.from_index(self.to_index(date)? + days)
    }

    /// index of the last tabulated day
    pub fn max_index(&self) -> i64 {
        self.rows()
            .iter()
            .flat_map(|row| row.iter())
            .map(|&d| d as i64)
            .sum::<i64>()
            - 1
    }
}
