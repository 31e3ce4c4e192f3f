// ABOUTME: Free-text exercise query resolution against the names in an upload
// ABOUTME: Exact case-insensitive match first, then a unique substring match

//! Exercise name resolution
//!
//! A query resolves to exactly one canonical exercise name or fails. A looser
//! match never silently picks one of several candidates.

use liftlog_core::errors::AnalysisError;
use liftlog_core::models::WorkoutRow;
use std::collections::BTreeSet;

/// Outcome of matching a query against the distinct exercise names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseMatch {
    /// Exactly one exercise selected
    Resolved(String),
    /// Several exercises contain the query (sorted)
    Ambiguous(Vec<String>),
    /// Nothing equals or contains the query
    NotFound,
}

impl ExerciseMatch {
    /// Convert into a result, attaching the query to failures
    ///
    /// # Errors
    ///
    /// `AmbiguousMatch` or `NoMatch` for the corresponding variants
    pub fn into_result(self, query: &str) -> Result<String, AnalysisError> {
        match self {
            Self::Resolved(name) => Ok(name),
            Self::Ambiguous(candidates) => Err(AnalysisError::AmbiguousMatch {
                query: query.to_owned(),
                candidates,
            }),
            Self::NotFound => Err(AnalysisError::NoMatch {
                query: query.to_owned(),
            }),
        }
    }
}

/// Distinct exercise names in the rows, sorted
#[must_use]
pub fn distinct_exercises(rows: &[WorkoutRow]) -> BTreeSet<&str> {
    rows.iter().map(|row| row.exercise_name.as_str()).collect()
}

/// Match `query` against a set of names
///
/// A single case-insensitive exact match wins outright, even when other names
/// contain the query. Otherwise the query must be a case-insensitive substring
/// of exactly one name.
#[must_use]
pub fn match_exercise<'a, I>(names: I, query: &str) -> ExerciseMatch
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_unstable();
    names.dedup();

    let lowered: Vec<(String, &str)> = names
        .into_iter()
        .map(|name| (name.to_lowercase(), name))
        .collect();

    let mut exact = lowered.iter().filter(|(lower, _)| *lower == needle);
    if let (Some((_, name)), None) = (exact.next(), exact.next()) {
        return ExerciseMatch::Resolved((*name).to_owned());
    }

    let partial: Vec<String> = lowered
        .iter()
        .filter(|(lower, _)| lower.contains(&needle))
        .map(|(_, name)| (*name).to_owned())
        .collect();

    match partial.len() {
        0 => ExerciseMatch::NotFound,
        1 => partial
            .into_iter()
            .next()
            .map_or(ExerciseMatch::NotFound, ExerciseMatch::Resolved),
        _ => ExerciseMatch::Ambiguous(partial),
    }
}

/// Resolve a user query to one exercise name present in `rows`
///
/// # Errors
///
/// - `EmptyExerciseSelection` when the query is blank
/// - `AmbiguousMatch` when several exercises contain the query
/// - `NoMatch` when none does
pub fn resolve_exercise(rows: &[WorkoutRow], query: &str) -> Result<String, AnalysisError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AnalysisError::EmptyExerciseSelection);
    }

    match_exercise(distinct_exercises(rows), query).into_result(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = [
        "Bench Press (Barbell)",
        "Incline Bench Press (Dumbbell)",
        "Squat (Barbell)",
        "Deadlift",
    ];

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(
            match_exercise(NAMES, "deadlift"),
            ExerciseMatch::Resolved("Deadlift".into())
        );
    }

    #[test]
    fn test_unique_substring_match() {
        assert_eq!(
            match_exercise(NAMES, "squat"),
            ExerciseMatch::Resolved("Squat (Barbell)".into())
        );
    }

    #[test]
    fn test_exact_beats_multiple_substrings() {
        let names = ["Press", "Bench Press", "Overhead Press"];
        assert_eq!(
            match_exercise(names, "PRESS"),
            ExerciseMatch::Resolved("Press".into())
        );
    }

    #[test]
    fn test_case_variants_are_ambiguous() {
        let names = ["Squat", "squat"];
        assert_eq!(
            match_exercise(names, "SQUAT"),
            ExerciseMatch::Ambiguous(vec!["Squat".into(), "squat".into()])
        );
    }

    #[test]
    fn test_duplicates_do_not_cause_ambiguity() {
        let names = ["Deadlift", "Deadlift"];
        assert_eq!(
            match_exercise(names, "dead"),
            ExerciseMatch::Resolved("Deadlift".into())
        );
    }
}
