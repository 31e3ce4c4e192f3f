// ABOUTME: Personal record models for a single exercise
// ABOUTME: One-rep-max, heaviest set, and highest-volume set records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Set with the highest Epley one-rep-max estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxRecord {
    /// Estimated one-rep-max, rounded to one decimal
    pub estimated_value: f64,
    /// Load of the set
    pub weight: f64,
    /// Repetitions of the set
    pub reps: u32,
    /// Date of the set
    pub date: NaiveDate,
}

/// Heaviest set (ties broken by more reps)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxWeightRecord {
    /// Load of the set
    pub weight: f64,
    /// Repetitions of the set
    pub reps: u32,
    /// Date of the set
    pub date: NaiveDate,
}

/// Set with the largest `weight * reps`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaxVolumeRecord {
    /// `weight * reps`
    pub volume: f64,
    /// Load of the set
    pub weight: f64,
    /// Repetitions of the set
    pub reps: u32,
    /// Date of the set
    pub date: NaiveDate,
}

/// All personal records of one exercise, each computed over every valid set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalRecords {
    /// Best estimated one-rep-max
    pub one_rep_max: OneRepMaxRecord,
    /// Heaviest set
    pub max_weight: MaxWeightRecord,
    /// Highest-volume set
    pub max_volume: MaxVolumeRecord,
}
