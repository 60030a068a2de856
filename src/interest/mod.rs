//! Three-tier interest accrual over a BS date range.
//!
//! Whole years compound annually at twelve times the monthly rate. Leftover
//! months and leftover days each earn simple interest on the post-compounding
//! principal; the two simple tiers share that base and are not chained.
//! Amounts keep full precision until the [`InterestResult`] is built.

pub mod accrual;
pub mod compound;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::CalendarTable;
use crate::config::AccrualConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{overflow, CalendarError, Result};
use crate::types::{BsDate, DateBreakdown};

pub use accrual::AccrualEngine;
pub use compound::{future_value, CompoundedPrincipal, CompoundingEngine};

/// interest owed over a date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestResult {
    pub principal: Money,
    pub total_interest: Money,
    pub final_amount: Money,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u32,
    pub yearly_interest: Money,
    pub monthly_interest: Money,
    pub daily_interest: Money,
}

impl InterestResult {
    /// no elapsed time, nothing owed beyond principal
    pub fn zero(principal: Money, dp: u32) -> Self {
        Self {
            principal: principal.round_dp(dp),
            total_interest: Money::ZERO,
            final_amount: principal.round_dp(dp),
            years: 0,
            months: 0,
            days: 0,
            total_days: 0,
            yearly_interest: Money::ZERO,
            monthly_interest: Money::ZERO,
            daily_interest: Money::ZERO,
        }
    }

    pub fn breakdown(&self) -> DateBreakdown {
        DateBreakdown {
            years: self.years,
            months: self.months,
            days: self.days,
            total_days: self.total_days,
        }
    }
}

/// tiered interest engine bound to a calendar table
#[derive(Debug, Clone, Copy)]
pub struct InterestEngine<'t> {
    table: &'t CalendarTable,
    config: AccrualConfig,
}

impl InterestEngine<'static> {
    /// standard formula over the built-in table
    pub fn standard() -> Self {
        Self::new(CalendarTable::standard())
    }
}

impl Default for InterestEngine<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<'t> InterestEngine<'t> {
    pub fn new(table: &'t CalendarTable) -> Self {
        Self {
            table,
            config: AccrualConfig::nepal_standard(),
        }
    }

    pub fn with_config(table: &'t CalendarTable, config: AccrualConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn config(&self) -> &AccrualConfig {
        &self.config
    }

    pub fn table(&self) -> &'t CalendarTable {
        self.table
    }

    /// interest on `principal` at a monthly percentage rate from `start` to `end`
    pub fn accrue(
        &self,
        principal: Money,
        monthly_rate_percent: Decimal,
        start: &BsDate,
        end: &BsDate,
    ) -> Result<InterestResult> {
        let monthly_rate = Rate::from_percentage(monthly_rate_percent);
        validate_inputs(principal, monthly_rate)?;

        let breakdown = self.table.breakdown(start, end)?;
        let result = self.accrue_over(principal, monthly_rate, &breakdown)?;

        debug!(
            %start,
            %end,
            %principal,
            %monthly_rate_percent,
            total_days = result.total_days,
            total_interest = %result.total_interest,
            "interest accrued"
        );

        Ok(result)
    }

    /// apply the three tiers to an already computed breakdown
    ///
    /// Same input rules as [`InterestEngine::accrue`]. Growth past the
    /// decimal range is an `Overflow` error.
    pub fn accrue_over(&self, principal: Money, monthly_rate: Rate, breakdown: &DateBreakdown) -> Result<InterestResult> {
        validate_inputs(principal, monthly_rate)?;

        let dp = self.config.output_decimal_places;
        if breakdown.total_days == 0 {
            return Ok(InterestResult::zero(principal, dp));
        }

        let annual_rate = monthly_rate.annualized().ok_or_else(|| overflow("annual rate"))?;
        let compounded = CompoundingEngine::new().compound_annually(principal, annual_rate, breakdown.years)?;
        let base = compounded.principal_after_years;

        let simple = AccrualEngine::new(self.config.days_per_month_basis);
        let monthly_interest = simple.monthly_interest(base, monthly_rate, breakdown.months)?;
        let daily_interest = simple.daily_interest(base, monthly_rate, breakdown.days)?;

        let simple_interest = monthly_interest
            .checked_add(daily_interest)
            .ok_or_else(|| overflow("simple interest"))?;
        let total_interest = compounded
            .yearly_interest
            .checked_add(simple_interest)
            .ok_or_else(|| overflow("total interest"))?;
        let final_amount = base
            .checked_add(simple_interest)
            .ok_or_else(|| overflow("final amount"))?;

        Ok(InterestResult {
            principal: principal.round_dp(dp),
            total_interest: total_interest.round_dp(dp),
            final_amount: final_amount.round_dp(dp),
            years: breakdown.years,
            months: breakdown.months,
            days: breakdown.days,
            total_days: breakdown.total_days,
            yearly_interest: compounded.yearly_interest.round_dp(dp),
            monthly_interest: monthly_interest.round_dp(dp),
            daily_interest: daily_interest.round_dp(dp),
        })
    }
}

fn validate_inputs(principal: Money, monthly_rate: Rate) -> Result<()> {
    if !principal.is_positive() {
        return Err(CalendarError::InvalidArgument {
            message: format!("principal must be positive, got {}", principal),
        });
    }
    if monthly_rate.is_negative() {
        return Err(CalendarError::InvalidArgument {
            message: format!("monthly rate must not be negative, got {}", monthly_rate),
        });
    }
    Ok(())
}

/// interest with the standard formula and built-in table
pub fn accrue(
    principal: Money,
    monthly_rate_percent: Decimal,
    start: &BsDate,
    end: &BsDate,
) -> Result<InterestResult> {
    InterestEngine::standard().accrue(principal, monthly_rate_percent, start, end)
}
