//! Verdict aggregation over a domain's per-address lookup outcomes.

use crate::types::{DomainResult, DomainSpec, IpCheckResult, MatchMode, Verdict};

/// Whether a returned operator label matches any expected prefix.
///
/// Exact byte-prefix comparison, case-sensitive, no normalization:
/// `AMAZON` matches `AMAZON-02` but `AMAZON-` does not match `AMAZONX`.
#[must_use]
pub fn label_matches(label: &str, prefixes: &[String]) -> bool {
    prefixes.iter().any(|prefix| label.starts_with(prefix.as_str()))
}

/// Reduce a domain's per-address outcomes into one pollution verdict.
///
/// A failed lookup never matches. Lenient mode clears the domain on any
/// single match; strict mode requires every address to match. Pure:
/// the verdict depends only on the inputs and the mode.
#[must_use]
pub fn aggregate(spec: DomainSpec, ip_results: Vec<IpCheckResult>, mode: MatchMode) -> DomainResult {
    let matched = ip_results
        .iter()
        .filter(|res| res.label().is_some_and(|label| label_matches(label, &spec.expected)))
        .count();

    let verdict = match mode {
        MatchMode::Strict if matched == ip_results.len() => Verdict::StrictClean,
        MatchMode::Strict => Verdict::StrictPolluted,
        MatchMode::Lenient if matched > 0 => Verdict::LenientClean,
        MatchMode::Lenient => Verdict::LenientPolluted,
    };

    DomainResult {
        domain: spec.name,
        expected: spec.expected,
        ip_results,
        polluted: verdict.is_polluted(),
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;
    use std::net::Ipv4Addr;

    fn spec(prefixes: &[&str]) -> DomainSpec {
        DomainSpec::new(
            "example.com",
            prefixes.iter().map(|p| (*p).to_string()).collect(),
        )
    }

    fn ip(octet: u8) -> Ipv4Addr {
        Ipv4Addr::new(203, 0, 113, octet)
    }

    fn failure(octet: u8) -> IpCheckResult {
        IpCheckResult::failed(
            ip(octet),
            CheckError::Exhausted {
                last: Box::new(CheckError::Timeout(10)),
            },
        )
    }

    #[test]
    fn prefix_matching_is_byte_exact() {
        assert!(label_matches("AMAZON-02", &["AMAZON".to_string()]));
        assert!(!label_matches("AMAZONX", &["AMAZON-".to_string()]));
        assert!(!label_matches("amazon-02", &["AMAZON".to_string()]));
        assert!(label_matches(
            "CLOUDFLARENET",
            &["AMAZON".to_string(), "CLOUDFLARE".to_string()]
        ));
    }

    #[test]
    fn lenient_any_match_clears_the_domain() {
        let results = vec![
            IpCheckResult::labeled(ip(1), "AMAZON-02"),
            IpCheckResult::labeled(ip(2), "CHINANET"),
        ];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Lenient);
        assert!(!res.polluted);
        assert_eq!(res.verdict, Verdict::LenientClean);
    }

    #[test]
    fn lenient_no_match_is_polluted() {
        let results = vec![
            IpCheckResult::labeled(ip(1), "CHINANET"),
            IpCheckResult::labeled(ip(2), "CHINA-MOBILE"),
        ];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Lenient);
        assert!(res.polluted);
        assert_eq!(res.verdict, Verdict::LenientPolluted);
    }

    #[test]
    fn lenient_all_failures_is_polluted() {
        let results = vec![failure(1), failure(2)];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Lenient);
        assert!(res.polluted);
        assert_eq!(res.verdict, Verdict::LenientPolluted);
    }

    #[test]
    fn strict_single_mismatch_pollutes() {
        let results = vec![
            IpCheckResult::labeled(ip(1), "AMAZON-02"),
            IpCheckResult::labeled(ip(2), "CHINANET"),
        ];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Strict);
        assert!(res.polluted);
        assert_eq!(res.verdict, Verdict::StrictPolluted);
    }

    #[test]
    fn strict_all_match_is_clean() {
        let results = vec![
            IpCheckResult::labeled(ip(1), "AMAZON-02"),
            IpCheckResult::labeled(ip(2), "AMAZON-AES"),
        ];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Strict);
        assert!(!res.polluted);
        assert_eq!(res.verdict, Verdict::StrictClean);
    }

    #[test]
    fn strict_failure_counts_as_mismatch() {
        let results = vec![IpCheckResult::labeled(ip(1), "AMAZON-02"), failure(2)];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Strict);
        assert!(res.polluted);
    }

    #[test]
    fn results_keep_resolution_order() {
        let results = vec![
            IpCheckResult::labeled(ip(3), "AMAZON-02"),
            IpCheckResult::labeled(ip(1), "CHINANET"),
        ];
        let res = aggregate(spec(&["AMAZON"]), results, MatchMode::Lenient);
        assert_eq!(res.ip_results[0].ip, ip(3));
        assert_eq!(res.ip_results[1].ip, ip(1));
    }

    #[test]
    fn unresolved_domain_is_polluted() {
        let res = DomainResult::unresolved(spec(&["AMAZON"]), Verdict::ResolutionFailed);
        assert!(res.polluted);
        assert!(res.ip_results.is_empty());
        assert_eq!(res.verdict, Verdict::ResolutionFailed);
    }
}
