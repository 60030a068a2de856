use std::collections::BTreeMap;

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use hourglass_rs::SafeTimeProvider;
use tracing::debug;

use crate::calendar::CalendarTable;
use crate::errors::{CalendarError, Result};
use crate::types::BsDate;

/// Nepal Standard Time, UTC+05:45
pub const NEPAL_UTC_OFFSET_SECONDS: i32 = 5 * 3600 + 45 * 60;

/// a known (AD, BS) correspondence used to shift between calendars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarAnchor {
    pub ad: NaiveDate,
    pub bs: BsDate,
}

impl CalendarAnchor {
    /// 1 Baisakh 2000 BS fell on 14 April 1943
    pub const STANDARD: CalendarAnchor = CalendarAnchor {
        ad: match NaiveDate::from_ymd_opt(1943, 4, 14) {
            Some(date) => date,
            None => panic!("invalid anchor date"),
        },
        bs: BsDate::new(2000, 1, 1),
    };
}

const NEPAL_OFFSET: FixedOffset = match FixedOffset::east_opt(NEPAL_UTC_OFFSET_SECONDS) {
    Some(offset) => offset,
    None => panic!("invalid nepal offset"),
};

/// the fixed Nepal offset as a chrono timezone
pub fn nepal_offset() -> FixedOffset {
    NEPAL_OFFSET
}

impl CalendarTable {
    /// convert a Gregorian calendar date using the standard anchor
    pub fn gregorian_to_bs(&self, date: NaiveDate) -> Result<BsDate> {
        self.gregorian_to_bs_with(date, &CalendarAnchor::STANDARD)
    }

    /// convert a Gregorian calendar date by shifting from `anchor`
    pub fn gregorian_to_bs_with(&self, date: NaiveDate, anchor: &CalendarAnchor) -> Result<BsDate> {
        let days_diff = (date - anchor.ad).num_days();
        let target = self.to_index(&anchor.bs)? + days_diff;

        if target < 0 || target > self.max_index() {
            debug!(%date, target, "gregorian date outside calendar table");
            return Err(CalendarError::AdOutOfTableRange { date });
        }

        self.from_index(target)
    }

    /// BS date of the UTC calendar day of `instant`
    pub fn ad_to_bs(&self, instant: DateTime<Utc>) -> Result<BsDate> {
        self.gregorian_to_bs(instant.date_naive())
    }

    /// BS date of `instant` as seen at a fixed UTC offset
    pub fn local_bs_date(&self, instant: DateTime<Utc>, offset: FixedOffset) -> Result<BsDate> {
        self.gregorian_to_bs(instant.with_timezone(&offset).date_naive())
    }

    /// BS date in Nepal at `instant`
    pub fn today(&self, instant: DateTime<Utc>) -> Result<BsDate> {
        self.local_bs_date(instant, nepal_offset())
    }

    /// BS date in Nepal according to an injected clock
    pub fn today_with(&self, time_provider: &SafeTimeProvider) -> Result<BsDate> {
        self.today(time_provider.now())
    }

    /// Gregorian date corresponding to a BS date
    pub fn bs_to_ad(&self, date: &BsDate) -> Result<NaiveDate> {
        self.bs_to_ad_with(date, &CalendarAnchor::STANDARD)
    }

    pub fn bs_to_ad_with(&self, date: &BsDate, anchor: &CalendarAnchor) -> Result<NaiveDate> {
        let offset = self.to_index(date)? - self.to_index(&anchor.bs)?;
        anchor
            .ad
            .checked_add_signed(Duration::days(offset))
            .ok_or_else(|| CalendarError::InvalidArgument {
                message: format!(
                    "{} is {} days from the anchor {}, past the gregorian range",
                    date, offset, anchor.ad
                ),
            })
    }

    /// bucket items by the Nepal-local BS day of their timestamp
    ///
    /// Items whose timestamp falls outside the table fail the whole call.
    pub fn group_by_bs_day<T, I, F>(&self, items: I, timestamp: F) -> Result<BTreeMap<BsDate, Vec<T>>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> DateTime<Utc>,
    {
        let mut groups: BTreeMap<BsDate, Vec<T>> = BTreeMap::new();
        for item in items {
            let day = self.today(timestamp(&item))?;
            groups.entry(day).or_default().push(item);
        }
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hourglass_rs::TimeSource;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_anchor_maps_to_epoch() {
        let table = CalendarTable::standard();
        assert_eq!(table.gregorian_to_bs(ymd(1943, 4, 14)).unwrap(), BsDate::new(2000, 1, 1));
        assert_eq!(table.bs_to_ad(&BsDate::new(2000, 1, 1)).unwrap(), ymd(1943, 4, 14));
    }

    #[test]
    fn test_known_new_years() {
        let table = CalendarTable::standard();
        assert_eq!(table.gregorian_to_bs(ymd(2023, 4, 14)).unwrap(), BsDate::new(2080, 1, 1));
        assert_eq!(table.gregorian_to_bs(ymd(2024, 4, 13)).unwrap(), BsDate::new(2081, 1, 1));
        assert_eq!(table.gregorian_to_bs(ymd(2025, 4, 14)).unwrap(), BsDate::new(2082, 1, 1));
        assert_eq!(table.gregorian_to_bs(ymd(2024, 4, 12)).unwrap(), BsDate::new(2080, 12, 30));
        assert_eq!(table.gregorian_to_bs(ymd(2024, 7, 16)).unwrap(), BsDate::new(2081, 4, 1));
    }

    #[test]
    fn test_reverse_conversion() {
        let table = CalendarTable::standard();
        for ad in [ymd(1950, 1, 1), ymd(2000, 2, 29), ymd(2023, 4, 14), ymd(2033, 12, 31)] {
            let bs = table.gregorian_to_bs(ad).unwrap();
            assert_eq!(table.bs_to_ad(&bs).unwrap(), ad);
        }
    }

    #[test]
    fn test_outside_table_fails_loudly() {
        let table = CalendarTable::standard();
        assert_eq!(
            table.gregorian_to_bs(ymd(1943, 4, 13)),
            Err(CalendarError::AdOutOfTableRange { date: ymd(1943, 4, 13) })
        );
        assert_eq!(table.gregorian_to_bs(ymd(2034, 4, 13)).unwrap(), table.last_date());
        assert_eq!(
            table.gregorian_to_bs(ymd(2034, 4, 14)),
            Err(CalendarError::AdOutOfTableRange { date: ymd(2034, 4, 14) })
        );
    }

    #[test]
    fn test_ad_to_bs_uses_utc_day() {
        let table = CalendarTable::standard();
        let instant = Utc.with_ymd_and_hms(2023, 4, 13, 20, 0, 0).unwrap();
        assert_eq!(table.ad_to_bs(instant).unwrap(), BsDate::new(2079, 12, 30));
    }

    #[test]
    fn test_today_applies_nepal_offset() {
        let table = CalendarTable::standard();

        // 18:14 UTC is 23:59 in Kathmandu, still the 13th
        let before = Utc.with_ymd_and_hms(2023, 4, 13, 18, 14, 0).unwrap();
        assert_eq!(table.today(before).unwrap(), BsDate::new(2079, 12, 30));

        // 18:15 UTC is midnight in Kathmandu, new year
        let after = Utc.with_ymd_and_hms(2023, 4, 13, 18, 15, 0).unwrap();
        assert_eq!(table.today(after).unwrap(), BsDate::new(2080, 1, 1));
    }

    #[test]
    fn test_today_with_injected_clock() {
        let table = CalendarTable::standard();
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 4, 12, 12, 0, 0).unwrap()
        ));
        let control = time.test_control().unwrap();

        assert_eq!(table.today_with(&time).unwrap(), BsDate::new(2080, 12, 30));

        control.advance(Duration::days(1));
        assert_eq!(table.today_with(&time).unwrap(), BsDate::new(2081, 1, 1));
    }

    #[test]
    fn test_custom_anchor() {
        let table = CalendarTable::standard();
        let anchor = CalendarAnchor {
            ad: ymd(2023, 4, 14),
            bs: BsDate::new(2080, 1, 1),
        };
        assert_eq!(
            table.gregorian_to_bs_with(ymd(2024, 4, 13), &anchor).unwrap(),
            table.gregorian_to_bs(ymd(2024, 4, 13)).unwrap()
        );
        assert_eq!(table.bs_to_ad_with(&BsDate::new(2081, 1, 1), &anchor).unwrap(), ymd(2024, 4, 13));
    }

    #[test]
    fn test_anchor_near_gregorian_limit() {
        let table = CalendarTable::standard();
        let anchor = CalendarAnchor {
            ad: NaiveDate::MAX,
            bs: BsDate::new(2000, 1, 1),
        };
        assert!(matches!(
            table.bs_to_ad_with(&BsDate::new(2001, 1, 1), &anchor),
            Err(CalendarError::InvalidArgument { .. })
        ));
        assert_eq!(table.bs_to_ad_with(&BsDate::new(2000, 1, 1), &anchor).unwrap(), NaiveDate::MAX);
    }

    #[test]
    fn test_group_by_bs_day() {
        let table = CalendarTable::standard();
        let txns = vec![
            ("a", Utc.with_ymd_and_hms(2023, 4, 13, 10, 0, 0).unwrap()),
            ("b", Utc.with_ymd_and_hms(2023, 4, 13, 19, 0, 0).unwrap()),
            ("c", Utc.with_ymd_and_hms(2023, 4, 14, 6, 0, 0).unwrap()),
        ];

        let groups = table.group_by_bs_day(txns, |t| t.1).unwrap();
        assert_eq!(groups.len(), 2);
        let old_year: Vec<&str> = groups[&BsDate::new(2079, 12, 30)].iter().map(|t| t.0).collect();
        let new_year: Vec<&str> = groups[&BsDate::new(2080, 1, 1)].iter().map(|t| t.0).collect();
        assert_eq!(old_year, vec!["a"]);
        assert_eq!(new_year, vec!["b", "c"]);
    }
}
