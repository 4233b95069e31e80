use serde::{Deserialize, Serialize};

/// Top-level Trivy filesystem-scan report. Only the fields the converter
/// consumes are modeled; everything else in the report is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    #[serde(rename = "Results")]
    pub results: Option<Vec<ScanResult>>,
}

/// One scanned target and the vulnerabilities reported against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    #[serde(rename = "Target")]
    pub target: Option<String>,

    /// Kept as raw JSON values so a single malformed entry can be dropped
    /// without failing the whole report.
    #[serde(rename = "Vulnerabilities")]
    pub vulnerabilities: Option<Vec<serde_json::Value>>,
}

/// A single vulnerability record. Trivy guarantees none of these fields,
/// so every one is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(rename = "VulnerabilityID")]
    pub vulnerability_id: Option<String>,

    /// Legacy identifier field, consulted when `VulnerabilityID` is absent.
    #[serde(rename = "ID")]
    pub id: Option<String>,

    #[serde(rename = "Severity")]
    pub severity: Option<String>,

    #[serde(rename = "PkgName")]
    pub pkg_name: Option<String>,

    #[serde(rename = "InstalledVersion")]
    pub installed_version: Option<String>,

    #[serde(rename = "Title")]
    pub title: Option<String>,

    #[serde(rename = "Description")]
    pub description: Option<String>,
}
