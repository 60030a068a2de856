use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalendarError;

/// a Bikram Sambat calendar date
///
/// Construction does not validate against the calendar table; use
/// [`CalendarTable::validate`](crate::calendar::CalendarTable::validate) or
/// [`BsDate::checked`] when the input comes from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BsDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl BsDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// create and validate against the built-in calendar table
    pub fn checked(year: i32, month: u8, day: u8) -> crate::errors::Result<Self> {
        let date = Self::new(year, month, day);
        crate::calendar::CalendarTable::standard().validate(&date)?;
        Ok(date)
    }

    /// month name, if the month number is in range
    pub fn month_name(&self) -> Option<&'static str> {
        BsMonth::from_number(self.month).map(|m| m.name())
    }

    /// (year, month) of the month immediately before this one
    pub fn previous_month(&self) -> (i32, u8) {
        if self.month <= 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        }
    }
}

impl fmt::Display for BsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for BsDate {
    type Err = CalendarError;

    /// accepts `YYYY-MM-DD` or `YYYY/MM/DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parse_err = |message: &str| CalendarError::ParseError {
            input: s.to_string(),
            message: message.to_string(),
        };

        let parts: Vec<&str> = trimmed.split(|c: char| c == '-' || c == '/').collect();
        if parts.len() != 3 {
            return Err(parse_err("expected year, month and day"));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| parse_err("year is not a number"))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| parse_err("month is not a number"))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| parse_err("day is not a number"))?;

        Ok(BsDate::new(year, month, day))
    }
}

/// Bikram Sambat month names
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BsMonth {
    Baisakh,
    Jestha,
    Asar,
    Shrawan,
    Bhadra,
    Asoj,
    Kartik,
    Mangsir,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

impl BsMonth {
    pub const ALL: [BsMonth; 12] = [
        BsMonth::Baisakh,
        BsMonth::Jestha,
        BsMonth::Asar,
        BsMonth::Shrawan,
        BsMonth::Bhadra,
        BsMonth::Asoj,
        BsMonth::Kartik,
        BsMonth::Mangsir,
        BsMonth::Poush,
        BsMonth::Magh,
        BsMonth::Falgun,
        BsMonth::Chaitra,
    ];

    /// 1-based month number
    pub fn from_number(month: u8) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self::ALL[(month - 1) as usize])
        } else {
            None
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn name(&self) -> &'static str {
        match self {
            BsMonth::Baisakh => "Baisakh",
            BsMonth::Jestha => "Jestha",
            BsMonth::Asar => "Asar",
            BsMonth::Shrawan => "Shrawan",
            BsMonth::Bhadra => "Bhadra",
            BsMonth::Asoj => "Asoj",
            BsMonth::Kartik => "Kartik",
            BsMonth::Mangsir => "Mangsir",
            BsMonth::Poush => "Poush",
            BsMonth::Magh => "Magh",
            BsMonth::Falgun => "Falgun",
            BsMonth::Chaitra => "Chaitra",
        }
    }
}

impl fmt::Display for BsMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// civil difference between two BS dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateBreakdown {
    pub years: u32,
    /// always 0..=11
    pub months: u32,
    pub days: u32,
    pub total_days: u32,
}

impl DateBreakdown {
    pub const ZERO: DateBreakdown = DateBreakdown {
        years: 0,
        months: 0,
        days: 0,
        total_days: 0,
    };

    pub fn is_zero(&self) -> bool {
        self.total_days == 0
    }

    /// whole calendar months, years folded in
    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for DateBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date: BsDate = "2080-1-5".parse().unwrap();
        assert_eq!(date, BsDate::new(2080, 1, 5));
        assert_eq!(date.to_string(), "2080-01-05");

        let slashed: BsDate = " 2081/12/30 ".parse().unwrap();
        assert_eq!(slashed, BsDate::new(2081, 12, 30));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!("2080-01".parse::<BsDate>(), Err(CalendarError::ParseError { .. })));
        assert!(matches!("20x0-01-01".parse::<BsDate>(), Err(CalendarError::ParseError { .. })));
        assert!(matches!("2080-01-999".parse::<BsDate>(), Err(CalendarError::ParseError { .. })));
    }

    #[test]
    fn test_checked_validates() {
        assert_eq!(BsDate::checked(2080, 2, 32).unwrap(), BsDate::new(2080, 2, 32));
        assert!(matches!(BsDate::checked(2080, 3, 32), Err(CalendarError::InvalidDay { max: 31, .. })));
        assert!(matches!(BsDate::checked(1999, 1, 1), Err(CalendarError::UnknownYear { year: 1999 })));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(BsMonth::from_number(1), Some(BsMonth::Baisakh));
        assert_eq!(BsMonth::from_number(12), Some(BsMonth::Chaitra));
        assert_eq!(BsMonth::from_number(0), None);
        assert_eq!(BsMonth::from_number(13), None);
        assert_eq!(BsMonth::Poush.number(), 9);
        assert_eq!(BsDate::new(2080, 6, 1).month_name(), Some("Asoj"));
    }

    #[test]
    fn test_previous_month_rolls_year() {
        assert_eq!(BsDate::new(2080, 1, 10).previous_month(), (2079, 12));
        assert_eq!(BsDate::new(2080, 7, 10).previous_month(), (2080, 6));
    }

    #[test]
    fn test_breakdown_display() {
        let b = DateBreakdown { years: 1, months: 2, days: 1, total_days: 428 };
        assert_eq!(b.to_string(), "1 year, 2 months, 1 day");
        assert_eq!(b.total_months(), 14);
    }
}
