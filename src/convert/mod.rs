//! Conversion of Trivy filesystem-scan reports into the SonarQube generic
//! issue format.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::ConvertError;
use crate::models::sonar::{Issue, IssueLocation, IssueReport, IssueSeverity, IssueType};
use crate::models::trivy::{ScanReport, Vulnerability};

/// Engine identifier reported to SonarQube for every converted issue.
pub const ENGINE_ID: &str = "trivy";

/// Rule identifier used when a finding carries no usable identifier.
pub const UNKNOWN_RULE_ID: &str = "TRIVY-UNKNOWN";

/// Mount root under which the scanner reports filesystem targets.
const SCAN_MOUNT_ROOT: &str = "/scan";
const SCAN_MOUNT_PREFIX: &str = "/scan/";

/// Maps one vulnerability record onto a Sonar issue.
///
/// `target` is the scan target the vulnerability was reported under and
/// `service_dir` the workspace directory the scanned service lives in;
/// targets under the scanner's mount root are rewritten onto it.
pub fn map_finding(vuln: &Vulnerability, target: &str, service_dir: &str) -> Issue {
    let severity = IssueSeverity::from_trivy(vuln.severity.as_deref());

    let rule_id = non_empty(vuln.vulnerability_id.as_deref())
        .or_else(|| non_empty(vuln.id.as_deref()))
        .unwrap_or(UNKNOWN_RULE_ID);

    let title = non_empty(vuln.title.as_deref())
        .or_else(|| non_empty(vuln.description.as_deref()))
        .unwrap_or(rule_id);
    let pkg = vuln.pkg_name.as_deref().unwrap_or("");
    let installed = vuln.installed_version.as_deref().unwrap_or("");

    let message = format!("{}: {} ({} {})", rule_id, title, pkg, installed)
        .trim()
        .to_string();

    Issue {
        engine_id: ENGINE_ID.to_string(),
        rule_id: rule_id.to_string(),
        severity,
        issue_type: IssueType::Vulnerability,
        primary_location: IssueLocation {
            message,
            file_path: rewrite_target(target, service_dir),
        },
    }
}

/// Rewrites a scan target reported under the mount root into a path inside
/// the service directory. Targets outside the mount root (package
/// identifiers, image references) pass through unchanged.
fn rewrite_target(target: &str, service_dir: &str) -> String {
    if let Some(rest) = target.strip_prefix(SCAN_MOUNT_PREFIX) {
        Path::new(service_dir)
            .join(rest)
            .to_string_lossy()
            .into_owned()
    } else if target == SCAN_MOUNT_ROOT {
        service_dir.to_string()
    } else {
        target.to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Reads a Trivy scan report from `report_path` and writes the converted
/// issue report to `output_path`, creating parent directories as needed.
///
/// The input must be well-formed JSON. Individual vulnerability entries
/// that cannot be interpreted are dropped; everything else is converted in
/// document order.
pub fn convert(
    report_path: &Path,
    output_path: &Path,
    service_dir: &str,
) -> Result<(), ConvertError> {
    let raw = fs::read_to_string(report_path)?;
    let report: ScanReport = serde_json::from_str(&raw)?;

    let results = report.results.unwrap_or_default();
    info!(
        path = %report_path.display(),
        results = results.len(),
        "Parsed scan report"
    );

    let mut issues = Vec::new();
    let mut skipped = 0usize;
    for result in &results {
        let target = non_empty(result.target.as_deref()).unwrap_or(service_dir);
        for entry in result.vulnerabilities.as_deref().unwrap_or_default() {
            match serde_json::from_value::<Vulnerability>(entry.clone()) {
                Ok(vuln) => issues.push(map_finding(&vuln, target, service_dir)),
                Err(e) => {
                    skipped += 1;
                    debug!(scan_target = target, error = %e, "Skipping malformed vulnerability entry");
                }
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "Dropped malformed vulnerability entries");
    }

    let out = IssueReport { issues };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, serde_json::to_string_pretty(&out)?)?;
    info!(
        path = %output_path.display(),
        issues = out.issues.len(),
        "Issue report written"
    );

    Ok(())
}
