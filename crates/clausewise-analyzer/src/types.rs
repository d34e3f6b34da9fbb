//! Checklist result types

use clausewise_domain::{RiskArea, RiskFinding};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fully validated checklist reply: one summary per risk area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistReport {
    /// Termination summary
    pub termination: String,

    /// Liability cap summary
    pub liability_cap: String,

    /// IP ownership summary
    pub ip_ownership: String,

    /// Jurisdiction summary
    pub jurisdiction: String,
}

impl ChecklistReport {
    /// Summary for one area
    pub fn summary(&self, area: RiskArea) -> &str {
        match area {
            RiskArea::Termination => &self.termination,
            RiskArea::LiabilityCap => &self.liability_cap,
            RiskArea::IpOwnership => &self.ip_ownership,
            RiskArea::Jurisdiction => &self.jurisdiction,
        }
    }

    /// One finding per area, in checklist order
    pub fn findings(&self) -> Vec<RiskFinding> {
        RiskArea::ALL
            .iter()
            .map(|&area| RiskFinding::new(area, self.summary(area)))
            .collect()
    }

    /// Key → summary mapping
    pub fn to_map(&self) -> BTreeMap<String, String> {
        RiskArea::ALL
            .iter()
            .map(|&area| (area.key().to_string(), self.summary(area).to_string()))
            .collect()
    }
}

/// Result of running the checklist when format errors are tolerated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistOutcome {
    /// The reply validated
    Parsed(ChecklistReport),

    /// The reply did not validate; kept verbatim for display
    Malformed {
        /// The reply as received
        raw: String,
        /// What was wrong with it
        reason: String,
    },
}

impl ChecklistOutcome {
    /// Whether the reply validated
    pub fn is_parsed(&self) -> bool {
        matches!(self, ChecklistOutcome::Parsed(_))
    }

    /// Findings to display; empty for a malformed reply
    pub fn findings(&self) -> Vec<RiskFinding> {
        match self {
            ChecklistOutcome::Parsed(report) => report.findings(),
            ChecklistOutcome::Malformed { .. } => Vec::new(),
        }
    }

    /// Key → summary mapping; empty for a malformed reply
    pub fn to_map(&self) -> BTreeMap<String, String> {
        match self {
            ChecklistOutcome::Parsed(report) => report.to_map(),
            ChecklistOutcome::Malformed { .. } => BTreeMap::new(),
        }
    }

    /// The raw reply, when it did not validate
    pub fn raw(&self) -> Option<&str> {
        match self {
            ChecklistOutcome::Parsed(_) => None,
            ChecklistOutcome::Malformed { raw, .. } => Some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clausewise_domain::RiskLevel;

    fn report() -> ChecklistReport {
        ChecklistReport {
            termination: "90 days notice (risk: low)".to_string(),
            liability_cap: "Uncapped indemnity (risk: high)".to_string(),
            ip_ownership: "Client owns deliverables (risk: medium)".to_string(),
            jurisdiction: "Delaware law".to_string(),
        }
    }

    #[test]
    fn test_findings_order_and_levels() {
        let findings = report().findings();
        let areas: Vec<_> = findings.iter().map(|f| f.area).collect();
        assert_eq!(areas, RiskArea::ALL.to_vec());
        assert_eq!(findings[0].level, Some(RiskLevel::Low));
        assert_eq!(findings[1].level, Some(RiskLevel::High));
        assert_eq!(findings[2].level, Some(RiskLevel::Medium));
        assert_eq!(findings[3].level, None);
    }

    #[test]
    fn test_map_has_exactly_the_checklist_keys() {
        let map = report().to_map();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["ip_ownership", "jurisdiction", "liability_cap", "termination"]
        );
        assert_eq!(map["termination"], "90 days notice (risk: low)");
    }

    #[test]
    fn test_malformed_outcome_is_empty() {
        let outcome = ChecklistOutcome::Malformed {
            raw: "Sorry".to_string(),
            reason: "expected value".to_string(),
        };
        assert!(!outcome.is_parsed());
        assert!(outcome.findings().is_empty());
        assert!(outcome.to_map().is_empty());
        assert_eq!(outcome.raw(), Some("Sorry"));
    }

    #[test]
    fn test_parsed_outcome() {
        let outcome = ChecklistOutcome::Parsed(report());
        assert!(outcome.is_parsed());
        assert_eq!(outcome.findings().len(), 4);
        assert!(outcome.raw().is_none());
    }
}
