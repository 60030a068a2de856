use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::calendar::NEPAL_UTC_OFFSET_SECONDS;
use crate::errors::{CalendarError, Result};

/// engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub accrual: AccrualConfig,
    pub clock: ClockConfig,
}

/// interest formula parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccrualConfig {
    /// fixed month length used for the daily tier
    pub days_per_month_basis: u32,
    /// decimal places for reported amounts
    pub output_decimal_places: u32,
}

/// wall-clock interpretation for "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub utc_offset_minutes: i32,
}

impl AccrualConfig {
    /// 30-day month, rupees and paisa
    pub fn nepal_standard() -> Self {
        Self {
            days_per_month_basis: 30,
            output_decimal_places: 2,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.days_per_month_basis == 0 {
            return Err(CalendarError::InvalidArgument {
                message: "days_per_month_basis must be positive".to_string(),
            });
        }
        if self.output_decimal_places > 10 {
            return Err(CalendarError::InvalidArgument {
                message: format!(
                    "output_decimal_places {} is more than 10",
                    self.output_decimal_places
                ),
            });
        }
        Ok(())
    }
}

impl Default for AccrualConfig {
    fn default() -> Self {
        Self::nepal_standard()
    }
}

impl ClockConfig {
    /// Nepal Standard Time
    pub fn nepal_standard() -> Self {
        Self {
            utc_offset_minutes: NEPAL_UTC_OFFSET_SECONDS / 60,
        }
    }

    pub fn offset(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| CalendarError::InvalidArgument {
                message: format!("utc offset of {} minutes is out of range", self.utc_offset_minutes),
            })
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::nepal_standard()
    }
}

impl EngineConfig {
    /// parse from json; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| CalendarError::InvalidArgument {
                message: format!("engine config json: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.accrual.validate()?;
        self.clock.offset()?;
        Ok(())
    }
}
