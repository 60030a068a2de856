use hourglass_rs::{SafeTimeProvider, TimeSource};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarTable;
use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::{CalendarError, Result};
use crate::interest::{InterestEngine, InterestResult};
use crate::types::{BsDate, DateBreakdown};

/// a loan as entered on the transaction form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub principal: Money,
    pub monthly_rate_percent: Decimal,
    pub start_date: BsDate,
    #[serde(default)]
    pub config: EngineConfig,
}

impl Loan {
    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    fn engine(&self) -> Result<InterestEngine<'static>> {
        InterestEngine::with_config(CalendarTable::standard(), self.config.accrual)
    }

    /// interest from the start date to `end`
    pub fn interest_until(&self, end: &BsDate) -> Result<InterestResult> {
        self.engine()?
            .accrue(self.principal, self.monthly_rate_percent, &self.start_date, end)
    }

    /// elapsed years, months and days up to `end`
    pub fn duration_until(&self, end: &BsDate) -> Result<DateBreakdown> {
        CalendarTable::standard().breakdown(&self.start_date, end)
    }

    /// today's BS date under the loan's clock settings
    pub fn current_date(&self, time_provider: &SafeTimeProvider) -> Result<BsDate> {
        let offset = self.config.clock.offset()?;
        CalendarTable::standard().local_bs_date(time_provider.now(), offset)
    }

    /// interest owed as of the provider's current time
    pub fn interest_as_of(&self, time_provider: &SafeTimeProvider) -> Result<InterestResult> {
        let today = self.current_date(time_provider)?;
        self.interest_until(&today)
    }

    /// interest owed as of the system clock
    pub fn interest_now(&self) -> Result<InterestResult> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.interest_as_of(&time)
    }
}

/// builder for [`Loan`]
#[derive(Debug, Default)]
pub struct LoanBuilder {
    principal: Option<Money>,
    monthly_rate_percent: Option<Decimal>,
    start_date: Option<BsDate>,
    config: Option<EngineConfig>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    /// monthly rate as a percentage, e.g. `dec!(1.5)` for 1.5% a month
    pub fn monthly_rate(mut self, percent: Decimal) -> Self {
        self.monthly_rate_percent = Some(percent);
        self
    }

    pub fn start_date(mut self, date: BsDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Loan> {
        let principal = self.principal.ok_or_else(|| missing("principal"))?;
        let monthly_rate_percent = self.monthly_rate_percent.ok_or_else(|| missing("monthly rate"))?;
        let start_date = self.start_date.ok_or_else(|| missing("start date"))?;
        let config = self.config.unwrap_or_default();

        if !principal.is_positive() {
            return Err(CalendarError::InvalidArgument {
                message: format!("principal must be positive, got {}", principal),
            });
        }
        if monthly_rate_percent < Decimal::ZERO {
            return Err(CalendarError::InvalidArgument {
                message: format!("monthly rate must not be negative, got {}%", monthly_rate_percent),
            });
        }
        CalendarTable::standard().validate(&start_date)?;
        config.validate()?;

        Ok(Loan {
            principal,
            monthly_rate_percent,
            start_date,
            config,
        })
    }
}

fn missing(field: &str) -> CalendarError {
    CalendarError::InvalidArgument {
        message: format!("{} is required", field),
    }
}
