use serde::{Deserialize, Serialize};

/// Severity levels accepted by the SonarQube generic issue import, ordered
/// from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueSeverity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl IssueSeverity {
    /// Maps a Trivy severity string onto the Sonar scale. Unrecognized or
    /// missing severities land on the informational tier.
    pub fn from_trivy(severity: Option<&str>) -> Self {
        match severity {
            Some("CRITICAL") => IssueSeverity::Blocker,
            Some("HIGH") => IssueSeverity::Critical,
            Some("MEDIUM") => IssueSeverity::Major,
            Some("LOW") => IssueSeverity::Minor,
            Some("UNKNOWN") => IssueSeverity::Info,
            _ => IssueSeverity::Info,
        }
    }
}

/// Issue categories in the generic import format. This converter only
/// produces vulnerabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    Vulnerability,
}

/// Where an issue was found and what to display for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLocation {
    pub message: String,
    pub file_path: String,
}

/// One issue in the generic import format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub engine_id: String,
    pub rule_id: String,
    pub severity: IssueSeverity,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub primary_location: IssueLocation,
}

/// The document SonarQube imports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueReport {
    pub issues: Vec<Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping_table() {
        assert_eq!(IssueSeverity::from_trivy(Some("CRITICAL")), IssueSeverity::Blocker);
        assert_eq!(IssueSeverity::from_trivy(Some("HIGH")), IssueSeverity::Critical);
        assert_eq!(IssueSeverity::from_trivy(Some("MEDIUM")), IssueSeverity::Major);
        assert_eq!(IssueSeverity::from_trivy(Some("LOW")), IssueSeverity::Minor);
        assert_eq!(IssueSeverity::from_trivy(Some("UNKNOWN")), IssueSeverity::Info);
    }

    #[test]
    fn test_severity_mapping_is_total() {
        for input in [Some("BOGUS"), Some(""), Some("high"), None] {
            assert_eq!(IssueSeverity::from_trivy(input), IssueSeverity::Info);
        }
    }

    #[test]
    fn test_severity_serializes_screaming() {
        let json = serde_json::to_string(&IssueSeverity::Blocker).unwrap();
        assert_eq!(json, "\"BLOCKER\"");
        let json = serde_json::to_string(&IssueType::Vulnerability).unwrap();
        assert_eq!(json, "\"VULNERABILITY\"");
    }

    #[test]
    fn test_issue_field_names_are_camel_case() {
        let issue = Issue {
            engine_id: "trivy".to_string(),
            rule_id: "CVE-2024-0001".to_string(),
            severity: IssueSeverity::Major,
            issue_type: IssueType::Vulnerability,
            primary_location: IssueLocation {
                message: "CVE-2024-0001: something (libx 1.0)".to_string(),
                file_path: "/work/svc/Cargo.lock".to_string(),
            },
        };

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["engineId"], "trivy");
        assert_eq!(value["ruleId"], "CVE-2024-0001");
        assert_eq!(value["type"], "VULNERABILITY");
        assert_eq!(value["primaryLocation"]["filePath"], "/work/svc/Cargo.lock");
    }
}
