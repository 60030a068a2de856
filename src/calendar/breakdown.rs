//! Civil year/month/day difference between two BS dates.
//!
//! Whole calendar months are counted first, ignoring the day of month. If the
//! end day is earlier than the start day, one month is given back and the
//! length of the month before the end month is added to the day count. When
//! that month is shorter than the start day (e.g. start on a 32nd, borrowing
//! from a 29-day month) the borrow walks one more month back.

use tracing::trace;

use crate::calendar::CalendarTable;
use crate::errors::{CalendarError, Result};
use crate::types::{BsDate, DateBreakdown};

impl CalendarTable {
    /// years, months and days from `start` to `end`
    ///
    /// An `end` on or before `start` is not an error: the result is all zeros.
    pub fn breakdown(&self, start: &BsDate, end: &BsDate) -> Result<DateBreakdown> {
        let total_days = self.days_between(start, end)?;
        if total_days <= 0 {
            return Ok(DateBreakdown::ZERO);
        }

        let mut total_months =
            (end.year - start.year) as i64 * 12 + end.month as i64 - start.month as i64;
        let mut days = end.day as i64 - start.day as i64;

        let (mut borrow_year, mut borrow_month) = end.previous_month();
        while days < 0 {
            total_months -= 1;
            days += self.month_length(borrow_year, borrow_month)? as i64;
            (borrow_year, borrow_month) = BsDate::new(borrow_year, borrow_month, 1).previous_month();
        }

        let breakdown = DateBreakdown {
            years: (total_months / 12) as u32,
            months: (total_months % 12) as u32,
            days: days as u32,
            total_days: total_days as u32,
        };
        trace!(%start, %end, %breakdown, total_days, "date breakdown");

        Ok(breakdown)
    }

    /// add whole months, then days, to a date
    ///
    /// The start day is carried as an offset from the first of the target
    /// month, so a day past the target month's end spills forward instead of
    /// clamping. This makes `add_breakdown(start, breakdown(start, end))`
    /// land on `end`. A target year past the table fails with `UnknownYear`.
    pub fn add_breakdown(&self, start: &BsDate, years: u32, months: u32, days: u32) -> Result<BsDate> {
        self.validate(start)?;

        let month_offset = start.month as i64 - 1 + years as i64 * 12 + months as i64;
        let year = i32::try_from(month_offset.div_euclid(12))
            .ok()
            .and_then(|whole_years| start.year.checked_add(whole_years))
            .ok_or(CalendarError::UnknownYear { year: i32::MAX })?;
        let month = month_offset.rem_euclid(12) as u8 + 1;

        let first_of_month = self.to_index(&BsDate::new(year, month, 1))?;
        self.from_index(first_of_month + start.day as i64 - 1 + days as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn breakdown(start: BsDate, end: BsDate) -> DateBreakdown {
        CalendarTable::standard().breakdown(&start, &end).unwrap()
    }

    #[test]
    fn test_borrow_from_end_month_predecessor() {
        // 2080 Baisakh has 31 days: (31 - 30) + 5
        let b = breakdown(BsDate::new(2080, 1, 30), BsDate::new(2080, 2, 5));
        assert_eq!(b, DateBreakdown { years: 0, months: 0, days: 6, total_days: 6 });
    }

    #[test]
    fn test_whole_years() {
        let b = breakdown(BsDate::new(2080, 1, 1), BsDate::new(2082, 1, 1));
        assert_eq!(b.years, 2);
        assert_eq!(b.months, 0);
        assert_eq!(b.days, 0);
        assert_eq!(b.total_days, 365 + 366);
    }

    #[test]
    fn test_mixed_duration() {
        let b = breakdown(BsDate::new(2080, 1, 1), BsDate::new(2081, 3, 11));
        assert_eq!((b.years, b.months, b.days), (1, 2, 10));
    }

    #[test]
    fn test_borrow_rolls_back_across_year_end() {
        // borrow from 2080 Chaitra (30 days)
        let b = breakdown(BsDate::new(2080, 11, 20), BsDate::new(2081, 1, 10));
        assert_eq!((b.years, b.months, b.days), (0, 1, 20));
    }

    #[test]
    fn test_borrow_walks_past_short_month() {
        // start on the 32nd, borrowing from 2080 Poush (29 days) is not enough
        let start = BsDate::new(2080, 2, 32);
        let end = BsDate::new(2080, 10, 1);
        let b = breakdown(start, end);
        // Poush 29 + Mangsir 30 + 1 - 32
        assert_eq!((b.years, b.months, b.days), (0, 6, 28));
        let table = CalendarTable::standard();
        assert_eq!(table.add_breakdown(&start, b.years, b.months, b.days).unwrap(), end);
    }

    #[test]
    fn test_zero_duration_policy() {
        let d = BsDate::new(2080, 5, 15);
        assert_eq!(breakdown(d, d), DateBreakdown::ZERO);
        assert_eq!(breakdown(BsDate::new(2081, 1, 1), BsDate::new(2080, 1, 1)), DateBreakdown::ZERO);
    }

    #[test]
    fn test_invalid_dates_are_errors() {
        let table = CalendarTable::standard();
        assert!(table.breakdown(&BsDate::new(2080, 1, 40), &BsDate::new(2081, 1, 1)).is_err());
        assert!(table.breakdown(&BsDate::new(2080, 1, 1), &BsDate::new(2300, 1, 1)).is_err());
    }

    #[test]
    fn test_add_breakdown_spills_forward() {
        let table = CalendarTable::standard();
        // 2080 Asar has 31 days, so Jestha 32 plus one month lands on Shrawan 1
        let date = table.add_breakdown(&BsDate::new(2080, 2, 32), 0, 1, 0).unwrap();
        assert_eq!(date, BsDate::new(2080, 4, 1));
        let date = table.add_breakdown(&BsDate::new(2080, 1, 15), 1, 11, 3).unwrap();
        assert_eq!(date, BsDate::new(2081, 12, 18));
    }

    #[test]
    fn test_add_breakdown_rejects_huge_offsets() {
        let table = CalendarTable::standard();
        let start = BsDate::new(2080, 1, 1);

        assert_eq!(
            table.add_breakdown(&start, u32::MAX, 0, 0),
            Err(CalendarError::UnknownYear { year: i32::MAX })
        );
        assert!(matches!(
            table.add_breakdown(&start, 0, u32::MAX, 0),
            Err(CalendarError::UnknownYear { .. })
        ));
        assert_eq!(
            table.add_breakdown(&start, 11, 0, 0),
            Err(CalendarError::UnknownYear { year: 2091 })
        );
        assert!(matches!(
            table.add_breakdown(&start, 0, 0, u32::MAX),
            Err(CalendarError::OutOfTableRange { .. })
        ));
    }

    proptest! {
        #[test]
        fn breakdown_is_additive(a in 0i64..33_000, gap in 0i64..2_000) {
            let table = CalendarTable::standard();
            let end_index = (a + gap).min(table.max_index());
            let start = table.from_index(a).unwrap();
            let end = table.from_index(end_index).unwrap();

            let b = table.breakdown(&start, &end).unwrap();
            prop_assert!(b.months < 12);
            prop_assert_eq!(b.total_days as i64, end_index - a);
            prop_assert_eq!(b.is_zero(), b.years == 0 && b.months == 0 && b.days == 0);
            prop_assert_eq!(table.add_breakdown(&start, b.years, b.months, b.days).unwrap(), end);
        }
    }
}
