//! # Tagged Outcomes
//!
//! Every bounded search in the crate (slope-driven length stepping, the
//! fatigue diameter loop, catalog lookup) ends in one of three ways. The
//! result is wrapped so the caller has to look at which one happened:
//!
//! - [`Outcome::Converged`] - the requirement was met
//! - [`Outcome::Capped`] - an iteration/diameter cap was reached first; the
//!   value is a lower bound on the required size
//! - [`Outcome::NoMatch`] - no catalog row qualified; an oversized fallback
//!   is returned instead

use serde::{Deserialize, Serialize};

/// Result of a bounded search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Outcome<T> {
    /// Requirement satisfied
    Converged(T),
    /// Search stopped at its cap; `value` is the last iterate
    Capped { value: T, reason: String },
    /// No catalog entry qualified; `fallback` is a conservative placeholder
    NoMatch { fallback: T },
}

/// Serializable summary of which [`Outcome`] variant occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Converged,
    Capped,
    NoMatch,
}

impl OutcomeStatus {
    /// Short label for reports
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Converged => "converged",
            OutcomeStatus::Capped => "capped (lower bound)",
            OutcomeStatus::NoMatch => "no catalog match (fallback)",
        }
    }
}

impl<T> Outcome<T> {
    /// Build a capped outcome
    pub fn capped(value: T, reason: impl Into<String>) -> Self {
        Outcome::Capped {
            value,
            reason: reason.into(),
        }
    }

    /// Borrow the carried value regardless of variant
    pub fn value(&self) -> &T {
        match self {
            Outcome::Converged(v) => v,
            Outcome::Capped { value, .. } => value,
            Outcome::NoMatch { fallback } => fallback,
        }
    }

    /// Take the carried value regardless of variant
    pub fn into_value(self) -> T {
        match self {
            Outcome::Converged(v) => v,
            Outcome::Capped { value, .. } => value,
            Outcome::NoMatch { fallback } => fallback,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, Outcome::Converged(_))
    }

    pub fn status(&self) -> OutcomeStatus {
        match self {
            Outcome::Converged(_) => OutcomeStatus::Converged,
            Outcome::Capped { .. } => OutcomeStatus::Capped,
            Outcome::NoMatch { .. } => OutcomeStatus::NoMatch,
        }
    }

    /// Transform the carried value, keeping the variant
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Converged(v) => Outcome::Converged(f(v)),
            Outcome::Capped { value, reason } => Outcome::Capped { value: f(value), reason },
            Outcome::NoMatch { fallback } => Outcome::NoMatch { fallback: f(fallback) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_access_all_variants() {
        assert_eq!(*Outcome::Converged(1.0).value(), 1.0);
        assert_eq!(Outcome::capped(2.0, "length cap").into_value(), 2.0);
        assert_eq!(Outcome::NoMatch { fallback: 3.0 }.into_value(), 3.0);
    }

    #[test]
    fn test_map_keeps_variant() {
        let capped = Outcome::capped(2, "diameter cap").map(|v| v * 10);
        assert_eq!(capped.status(), OutcomeStatus::Capped);
        assert_eq!(*capped.value(), 20);
        assert!(!capped.is_converged());
    }

    #[test]
    fn test_json_tagging() {
        let json = serde_json::to_string(&Outcome::capped(0.5, "cap")).unwrap();
        assert!(json.contains("\"status\":\"capped\""));
        let back: Outcome<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Outcome::capped(0.5, "cap"));
    }
}
