pub mod breakdown;
mod data;
pub mod convert;
pub mod index;
pub mod table;

use chrono::{DateTime, Utc};

use crate::errors::Result;
use crate::types::{BsDate, DateBreakdown};

pub use convert::{nepal_offset, CalendarAnchor, NEPAL_UTC_OFFSET_SECONDS};
pub use table::CalendarTable;

// free functions over the built-in table

pub fn is_valid_date(date: &BsDate) -> bool {
    CalendarTable::standard().is_valid_date(date)
}

pub fn month_length(year: i32, month: u8) -> Result<u8> {
    CalendarTable::standard().month_length(year, month)
}

pub fn days_between(start: &BsDate, end: &BsDate) -> Result<i64> {
    CalendarTable::standard().days_between(start, end)
}

pub fn breakdown(start: &BsDate, end: &BsDate) -> Result<DateBreakdown> {
    CalendarTable::standard().breakdown(start, end)
}

pub fn ad_to_bs(instant: DateTime<Utc>) -> Result<BsDate> {
    CalendarTable::standard().ad_to_bs(instant)
}

pub fn today(instant: DateTime<Utc>) -> Result<BsDate> {
    CalendarTable::standard().today(instant)
}
