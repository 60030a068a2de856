use crate::decimal::{Money, Rate};
use crate::errors::{overflow, Result};

/// outcome of compounding over whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundedPrincipal {
    pub principal_after_years: Money,
    pub yearly_interest: Money,
}

/// engine for the annual compounding tier
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundingEngine;

impl CompoundingEngine {
    pub fn new() -> Self {
        Self
    }

    /// compound once per whole year, adding each year's interest to the base
    ///
    /// Fails with `Overflow` once the balance leaves the decimal range.
    pub fn compound_annually(&self, principal: Money, annual_rate: Rate, years: u32) -> Result<CompoundedPrincipal> {
        let mut balance = principal;
        let mut yearly_interest = Money::ZERO;
        for _ in 0..years {
            let interest = balance
                .checked_mul(annual_rate.as_decimal())
                .ok_or_else(|| overflow("yearly interest"))?;
            yearly_interest = yearly_interest
                .checked_add(interest)
                .ok_or_else(|| overflow("accumulated yearly interest"))?;
            balance = balance
                .checked_add(interest)
                .ok_or_else(|| overflow("compounded balance"))?;
        }

        Ok(CompoundedPrincipal {
            principal_after_years: balance,
            yearly_interest,
        })
    }
}

/// future value after compounding once per year
pub fn future_value(present_value: Money, annual_rate: Rate, years: u32) -> Result<Money> {
    Ok(CompoundingEngine::new()
        .compound_annually(present_value, annual_rate, years)?
        .principal_after_years)
}
