//! Domain list loading and validation.

use anyhow::{bail, Context, Result};
use dnspect_core::DomainSpec;
use serde::Deserialize;
use std::path::Path;

/// On-disk shape of the domain list.
///
/// ```yaml
/// domains:
///   - name: example.com
///     expected_llcs: ["AMAZON", "CLOUDFLARE"]
/// ```
#[derive(Debug, Deserialize)]
struct SiteList {
    domains: Vec<SiteEntry>,
}

#[derive(Debug, Deserialize)]
struct SiteEntry {
    name: String,
    expected_llcs: Vec<String>,
}

/// Load and validate the domain list.
///
/// Guarantees the core invariants at the boundary: at least one domain,
/// every domain named, every domain with at least one non-empty expected
/// operator prefix. Any violation is fatal to the run.
pub fn load_domains(path: &Path) -> Result<Vec<DomainSpec>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read domain list {}", path.display()))?;
    let list: SiteList = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse domain list {}", path.display()))?;

    if list.domains.is_empty() {
        bail!("domain list {} contains no domains", path.display());
    }

    let mut specs = Vec::with_capacity(list.domains.len());
    for entry in list.domains {
        if entry.name.trim().is_empty() {
            bail!("domain list {} contains an entry without a name", path.display());
        }
        if entry.expected_llcs.is_empty() || entry.expected_llcs.iter().any(String::is_empty) {
            bail!(
                "domain {} needs at least one non-empty expected operator prefix",
                entry.name
            );
        }
        specs.push(DomainSpec::new(entry.name, entry.expected_llcs));
    }

    Ok(specs)
}
