//! Plain-text report rendering and persistence.

use chrono::Local;
use dnspect_core::{label_matches, DomainResult, RunSummary};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Render the run summary and per-domain detail as plain text.
///
/// The layout is stable: the header block carries the totals, then one
/// block per domain in arrival order with every address's operator label
/// or failure.
#[must_use]
pub fn render(summary: &RunSummary, results: &[DomainResult]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "DNS pollution report");
    let _ = writeln!(out, "generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "=================");
    let _ = writeln!(out, "domains checked: {}", summary.total);
    let _ = writeln!(out, "polluted domains: {}", summary.polluted);
    let _ = writeln!(out, "pollution rate: {:.2}%", summary.rate);
    let _ = writeln!(out, "severity: {}", summary.level);
    let _ = writeln!(out, "=================");
    let _ = writeln!(out);
    let _ = writeln!(out, "details:");

    for result in results {
        let _ = writeln!(out, "domain: {}", result.domain);
        let polluted = if result.polluted { "yes" } else { "no" };
        let _ = writeln!(out, "  verdict: {} (polluted: {polluted})", result.verdict);

        for ip_result in &result.ip_results {
            match &ip_result.outcome {
                Ok(label) => {
                    let status = if label_matches(label, &result.expected) {
                        "ok"
                    } else {
                        "possibly polluted"
                    };
                    let _ = writeln!(
                        out,
                        "  {}: operator={} (expected: {}) - {}",
                        ip_result.ip,
                        label,
                        result.expected.join(", "),
                        status
                    );
                }
                Err(err) => {
                    let _ = writeln!(out, "  {}: error - {}", ip_result.ip, err);
                }
            }
        }
        let _ = writeln!(out);
    }

    out
}

/// Auto-generated report path: `dnspect_report_<YYYYmmdd_HHMMSS>.txt`
#[must_use]
pub fn default_path() -> PathBuf {
    PathBuf::from(format!(
        "dnspect_report_{}.txt",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Persist the rendered report.
pub fn write(report: &str, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, report)
}
