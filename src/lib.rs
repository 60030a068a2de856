pub mod calendar;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod loan;
pub mod serialization;
pub mod types;

// re-export key types
pub use calendar::{
    ad_to_bs, breakdown, days_between, is_valid_date, month_length, nepal_offset, today,
    CalendarAnchor, CalendarTable, NEPAL_UTC_OFFSET_SECONDS,
};
pub use config::{AccrualConfig, ClockConfig, EngineConfig};
pub use decimal::{Money, Rate};
pub use errors::{CalendarError, Result};
pub use interest::{accrue, AccrualEngine, CompoundingEngine, InterestEngine, InterestResult};
pub use loan::{Loan, LoanBuilder};
pub use serialization::InterestView;
pub use types::{BsDate, BsMonth, DateBreakdown};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
