/// serialization support for results handed to the UI
use serde::{Deserialize, Serialize};

use crate::interest::InterestResult;
use crate::types::{BsDate, DateBreakdown};

/// display-ready view of an interest calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestView {
    pub start_date: String,
    pub end_date: String,
    pub duration: DurationView,
    pub amounts: AmountView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationView {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: u32,
    pub label: String,
}

/// amounts as fixed two-place strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountView {
    pub principal: String,
    pub yearly_interest: String,
    pub monthly_interest: String,
    pub daily_interest: String,
    pub total_interest: String,
    pub final_amount: String,
}

impl InterestView {
    pub fn from_result(start: &BsDate, end: &BsDate, result: &InterestResult) -> Self {
        let breakdown: DateBreakdown = result.breakdown();
        InterestView {
            start_date: start.to_string(),
            end_date: end.to_string(),
            duration: DurationView {
                years: breakdown.years,
                months: breakdown.months,
                days: breakdown.days,
                total_days: breakdown.total_days,
                label: breakdown.to_string(),
            },
            amounts: AmountView {
                principal: format!("{:.2}", result.principal.as_decimal()),
                yearly_interest: format!("{:.2}", result.yearly_interest.as_decimal()),
                monthly_interest: format!("{:.2}", result.monthly_interest.as_decimal()),
                daily_interest: format!("{:.2}", result.daily_interest.as_decimal()),
                total_interest: format!("{:.2}", result.total_interest.as_decimal()),
                final_amount: format!("{:.2}", result.final_amount.as_decimal()),
            },
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl InterestResult {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
