// ABOUTME: Analysis mode selection and progress series points
// ABOUTME: AnalysisMode parses the weight|1rm|volume query parameter

use crate::errors::AnalysisError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Metric plotted for each session
///
/// - `Weight`: load of the day's best set
/// - `OneRepMax`: Epley estimate of the day's best set
/// - `Volume`: `weight * reps` of the day's best set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnalysisMode {
    /// Raw weight
    #[default]
    #[serde(rename = "weight")]
    Weight,
    /// Estimated one-rep-max
    #[serde(rename = "1rm")]
    OneRepMax,
    /// Weight times reps
    #[serde(rename = "volume")]
    Volume,
}

impl AnalysisMode {
    /// All supported modes
    pub const ALL: [Self; 3] = [Self::Weight, Self::OneRepMax, Self::Volume];

    /// Wire name of the mode
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::OneRepMax => "1rm",
            Self::Volume => "volume",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = AnalysisError;

    /// Parse the exact wire names; matching is case-sensitive like the API
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weight" => Ok(Self::Weight),
            "1rm" => Ok(Self::OneRepMax),
            "volume" => Ok(Self::Volume),
            other => Err(AnalysisError::InvalidAnalysisMode {
                value: other.to_owned(),
            }),
        }
    }
}

/// One session in a progress series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Session date
    pub date: NaiveDate,
    /// Session metric for the selected mode
    pub value: f64,
    /// Best value seen up to and including this session
    pub running_best: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trips_wire_names() {
        for mode in AnalysisMode::ALL {
            assert_eq!(mode.as_str().parse::<AnalysisMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert_eq!(
            "1RM".parse::<AnalysisMode>(),
            Err(AnalysisError::InvalidAnalysisMode {
                value: "1RM".into()
            })
        );
    }

    #[test]
    fn test_mode_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&AnalysisMode::OneRepMax).unwrap(),
            "\"1rm\""
        );
    }
}
