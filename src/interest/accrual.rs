use crate::decimal::{Money, Rate};
use crate::errors::{overflow, CalendarError, Result};

/// engine for the simple (non-compounding) month and day tiers
#[derive(Debug, Clone, Copy)]
pub struct AccrualEngine {
    /// days in the notional month used to derive the daily rate
    pub days_per_month_basis: u32,
}

impl AccrualEngine {
    pub fn new(days_per_month_basis: u32) -> Self {
        Self { days_per_month_basis }
    }

    /// daily rate from a monthly rate
    pub fn daily_rate(&self, monthly_rate: Rate) -> Result<Rate> {
        monthly_rate
            .per_day(self.days_per_month_basis)
            .ok_or_else(|| CalendarError::InvalidArgument {
                message: "days_per_month_basis must be positive".to_string(),
            })
    }

    /// base * monthly rate * months
    pub fn monthly_interest(&self, base: Money, monthly_rate: Rate, months: u32) -> Result<Money> {
        base.simple_interest(monthly_rate, months)
            .ok_or_else(|| overflow("monthly interest"))
    }

    /// base * (monthly rate / basis) * days
    pub fn daily_interest(&self, base: Money, monthly_rate: Rate, days: u32) -> Result<Money> {
        base.simple_interest(self.daily_rate(monthly_rate)?, days)
            .ok_or_else(|| overflow("daily interest"))
    }
}

impl Default for AccrualEngine {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_tier() {
        let engine = AccrualEngine::default();
        let interest = engine.monthly_interest(Money::from_major(56_000), Rate::from_percentage(dec!(1)), 2).unwrap();
        assert_eq!(interest, Money::from_major(1_120));
    }

    #[test]
    fn test_daily_tier_uses_fixed_basis() {
        let engine = AccrualEngine::default();
        let rate = Rate::from_percentage(dec!(1));

        let interest = engine.daily_interest(Money::from_major(56_000), rate, 10).unwrap();
        assert_eq!(interest.round_dp(2), Money::from_str_exact("186.67").unwrap());

        // thirty days on a 30-day basis equals one month
        let month = engine.monthly_interest(Money::from_major(9_000), rate, 1).unwrap();
        let days = engine.daily_interest(Money::from_major(9_000), rate, 30).unwrap();
        assert_eq!(days.round_dp(8), month);
    }

    #[test]
    fn test_custom_basis() {
        let engine = AccrualEngine::new(31);
        let rate = Rate::from_percentage(dec!(3.1));
        assert_eq!(engine.daily_rate(rate).unwrap().as_decimal(), dec!(0.001));
    }

    #[test]
    fn test_zero_basis_is_rejected() {
        let engine = AccrualEngine::new(0);
        let rate = Rate::from_percentage(dec!(1));
        assert!(matches!(engine.daily_rate(rate), Err(CalendarError::InvalidArgument { .. })));
        assert!(engine.daily_interest(Money::from_major(100), rate, 1).is_err());
    }

    #[test]
    fn test_tier_overflow_is_an_error() {
        let engine = AccrualEngine::default();
        let huge = Money::from_decimal(rust_decimal::Decimal::MAX);
        let rate = Rate::from_percentage(dec!(50));
        assert!(matches!(engine.monthly_interest(huge, rate, 11), Err(CalendarError::Overflow { .. })));
        assert!(matches!(engine.daily_interest(huge, rate, 400), Err(CalendarError::Overflow { .. })));
    }
}
