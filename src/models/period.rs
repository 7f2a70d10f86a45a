use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DeskError, Result};

/// Time range selector for monthly series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalyticsPeriod {
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "3months")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6months")]
    SixMonths,
    #[serde(rename = "1year")]
    OneYear,
}

impl AnalyticsPeriod {
    pub const ALL: [AnalyticsPeriod; 4] = [
        AnalyticsPeriod::OneMonth,
        AnalyticsPeriod::ThreeMonths,
        AnalyticsPeriod::SixMonths,
        AnalyticsPeriod::OneYear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalyticsPeriod::OneMonth => "1month",
            AnalyticsPeriod::ThreeMonths => "3months",
            AnalyticsPeriod::SixMonths => "6months",
            AnalyticsPeriod::OneYear => "1year",
        }
    }

    pub fn months(self) -> usize {
        match self {
            AnalyticsPeriod::OneMonth => 1,
            AnalyticsPeriod::ThreeMonths => 3,
            AnalyticsPeriod::SixMonths => 6,
            AnalyticsPeriod::OneYear => 12,
        }
    }

    /// The most recent `months()` points of a series, oldest first.
    pub fn window<T: Clone>(self, series: &[T]) -> Vec<T> {
        let start = series.len().saturating_sub(self.months());
        series[start..].to_vec()
    }
}

impl fmt::Display for AnalyticsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalyticsPeriod {
    type Err = DeskError;

    fn from_str(value: &str) -> Result<Self> {
        AnalyticsPeriod::ALL
            .iter()
            .copied()
            .find(|period| period.as_str() == value)
            .ok_or_else(|| DeskError::UnknownPeriod(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_parsing() {
        assert_eq!("3months".parse::<AnalyticsPeriod>().unwrap(), AnalyticsPeriod::ThreeMonths);
        assert_eq!(AnalyticsPeriod::default(), AnalyticsPeriod::SixMonths);
        assert!(matches!(
            "fortnight".parse::<AnalyticsPeriod>(),
            Err(DeskError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn window_takes_latest_points() {
        let series = vec![1, 2, 3, 4, 5];
        assert_eq!(AnalyticsPeriod::OneMonth.window(&series), vec![5]);
        assert_eq!(AnalyticsPeriod::ThreeMonths.window(&series), vec![3, 4, 5]);
        assert_eq!(AnalyticsPeriod::OneYear.window(&series), series);
    }
}
