//! Run-level totals and severity classification.

use crate::types::DomainResult;

/// Severity of a whole run, classified from the pollution percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollutionLevel {
    /// Less than 20% of domains polluted
    Normal,
    /// 20% to under 40%
    Mild,
    /// 40% to under 60%
    Moderate,
    /// 60% or more
    Severe,
}

impl PollutionLevel {
    /// Classify a pollution percentage (0-100).
    ///
    /// Boundaries are lower-inclusive: exactly 20.0 is already `Mild`.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate < 20.0 {
            Self::Normal
        } else if rate < 40.0 {
            Self::Mild
        } else if rate < 60.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

impl std::fmt::Display for PollutionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Normal => "normal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        f.write_str(label)
    }
}

/// Totals over one run, recomputable from the result list at any time
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of domains checked
    pub total: usize,
    /// Number of domains judged polluted
    pub polluted: usize,
    /// Pollution percentage, 0-100
    pub rate: f64,
    /// Severity classification of `rate`
    pub level: PollutionLevel,
}

/// Reduce all per-domain verdicts into run totals.
///
/// An empty run is defined as 0% / normal.
#[must_use]
pub fn summarize(results: &[DomainResult]) -> RunSummary {
    let total = results.len();
    let polluted = results.iter().filter(|r| r.polluted).count();
    let rate = if total == 0 {
        0.0
    } else {
        polluted as f64 / total as f64 * 100.0
    };

    RunSummary {
        total,
        polluted,
        rate,
        level: PollutionLevel::from_rate(rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DomainResult, DomainSpec, Verdict};

    fn result(polluted: bool) -> DomainResult {
        let spec = DomainSpec::new("example.com", vec!["AMAZON".to_string()]);
        let verdict = if polluted {
            Verdict::LenientPolluted
        } else {
            Verdict::LenientClean
        };
        DomainResult {
            domain: spec.name,
            expected: spec.expected,
            ip_results: Vec::new(),
            polluted,
            verdict,
        }
    }

    #[test]
    fn threshold_boundaries_are_lower_inclusive() {
        assert_eq!(PollutionLevel::from_rate(19.999), PollutionLevel::Normal);
        assert_eq!(PollutionLevel::from_rate(20.0), PollutionLevel::Mild);
        assert_eq!(PollutionLevel::from_rate(39.999), PollutionLevel::Mild);
        assert_eq!(PollutionLevel::from_rate(40.0), PollutionLevel::Moderate);
        assert_eq!(PollutionLevel::from_rate(59.999), PollutionLevel::Moderate);
        assert_eq!(PollutionLevel::from_rate(60.0), PollutionLevel::Severe);
        assert_eq!(PollutionLevel::from_rate(100.0), PollutionLevel::Severe);
    }

    #[test]
    fn summarize_counts_and_classifies() {
        let results = vec![result(false), result(true)];
        let summary = summarize(&results);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.polluted, 1);
        assert!((summary.rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(summary.level, PollutionLevel::Moderate);
    }

    #[test]
    fn empty_run_is_normal() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.polluted, 0);
        assert!((summary.rate).abs() < f64::EPSILON);
        assert_eq!(summary.level, PollutionLevel::Normal);
    }

    #[test]
    fn all_clean_is_normal() {
        let results = vec![result(false), result(false), result(false)];
        let summary = summarize(&results);
        assert_eq!(summary.polluted, 0);
        assert_eq!(summary.level, PollutionLevel::Normal);
    }
}
