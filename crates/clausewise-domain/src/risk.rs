//! Contract-risk checklist vocabulary

use std::fmt;

/// One category of the fixed risk checklist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskArea {
    /// How and when either party may end the agreement
    Termination,

    /// Caps and exclusions on liability
    LiabilityCap,

    /// Who owns intellectual property created under the contract
    IpOwnership,

    /// Governing law and venue for disputes
    Jurisdiction,
}

impl RiskArea {
    /// All areas, in checklist order
    pub const ALL: [RiskArea; 4] = [
        RiskArea::Termination,
        RiskArea::LiabilityCap,
        RiskArea::IpOwnership,
        RiskArea::Jurisdiction,
    ];

    /// JSON key used in checklist responses
    pub fn key(&self) -> &'static str {
        match self {
            RiskArea::Termination => "termination",
            RiskArea::LiabilityCap => "liability_cap",
            RiskArea::IpOwnership => "ip_ownership",
            RiskArea::Jurisdiction => "jurisdiction",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            RiskArea::Termination => "Termination",
            RiskArea::LiabilityCap => "Liability cap",
            RiskArea::IpOwnership => "IP ownership",
            RiskArea::Jurisdiction => "Jurisdiction",
        }
    }

    /// Look up an area by its JSON key
    pub fn from_key(key: &str) -> Option<Self> {
        RiskArea::ALL.into_iter().find(|area| area.key() == key)
    }
}

impl fmt::Display for RiskArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative risk level embedded in a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    /// Low risk
    Low,

    /// Medium risk
    Medium,

    /// High risk
    High,
}

impl RiskLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Parse a level from a single word
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Find the level a free-text summary states.
    ///
    /// An explicit qualifier (`risk: high`, `Risk level - low`) wins, and the
    /// last one counts when there are several. Without a qualifier the first
    /// whole-word `low`, `medium` or `high` is used. Matching ignores case and
    /// splits words on anything that is not alphanumeric, so "high-risk"
    /// matches and "follow" does not.
    pub fn detect(summary: &str) -> Option<Self> {
        let words: Vec<&str> = summary
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();

        let qualified = words
            .iter()
            .enumerate()
            .filter(|(_, word)| word.eq_ignore_ascii_case("risk"))
            .filter_map(|(i, _)| {
                let mut rest = words[i + 1..].iter();
                match rest.next() {
                    Some(word) if word.eq_ignore_ascii_case("level") => {
                        rest.next().and_then(|w| RiskLevel::parse(w))
                    }
                    Some(word) => RiskLevel::parse(word),
                    None => None,
                }
            })
            .last();

        qualified.or_else(|| words.iter().find_map(|w| RiskLevel::parse(w)))
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a checklist result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskFinding {
    /// The checklist area
    pub area: RiskArea,

    /// Model-written summary
    pub summary: String,

    /// Level detected in the summary, if any
    pub level: Option<RiskLevel>,
}

impl RiskFinding {
    /// Create a finding, detecting the level from the summary
    pub fn new(area: RiskArea, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        let level = RiskLevel::detect(&summary);
        Self {
            area,
            summary,
            level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for area in RiskArea::ALL {
            assert_eq!(RiskArea::from_key(area.key()), Some(area));
        }
        assert_eq!(RiskArea::from_key("indemnity"), None);
    }

    #[test]
    fn test_checklist_order() {
        let keys: Vec<_> = RiskArea::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(
            keys,
            vec!["termination", "liability_cap", "ip_ownership", "jurisdiction"]
        );
    }

    #[test]
    fn test_detect_inline_qualifier() {
        assert_eq!(RiskLevel::detect("ok (risk: low)"), Some(RiskLevel::Low));
        assert_eq!(
            RiskLevel::detect("Uncapped indemnity. Risk: HIGH"),
            Some(RiskLevel::High)
        );
        assert_eq!(
            RiskLevel::detect("Medium-risk: 30 day notice"),
            Some(RiskLevel::Medium)
        );
    }

    #[test]
    fn test_detect_ignores_substrings() {
        assert_eq!(RiskLevel::detect("Follow the highway clause"), None);
        assert_eq!(RiskLevel::detect("Venue is Delaware"), None);
        assert_eq!(RiskLevel::detect(""), None);
    }

    #[test]
    fn test_detect_qualifier_beats_earlier_words() {
        assert_eq!(
            RiskLevel::detect("Low notice threshold: either party may exit in 7 days (risk: high)"),
            Some(RiskLevel::High)
        );
        assert_eq!(
            RiskLevel::detect("Only a high-level cap at annual fees; reasonable (risk: low)"),
            Some(RiskLevel::Low)
        );
    }

    #[test]
    fn test_detect_last_qualifier_wins() {
        assert_eq!(
            RiskLevel::detect("Was risk: high in the draft, now capped. Risk level: medium"),
            Some(RiskLevel::Medium)
        );
    }

    #[test]
    fn test_detect_without_qualifier_takes_first_mention() {
        assert_eq!(
            RiskLevel::detect("low probability but high impact"),
            Some(RiskLevel::Low)
        );
        assert_eq!(
            RiskLevel::detect("The risk is unclear, medium exposure"),
            Some(RiskLevel::Medium)
        );
    }

    #[test]
    fn test_finding_detects_level() {
        let finding = RiskFinding::new(RiskArea::Jurisdiction, "New York law (risk: medium)");
        assert_eq!(finding.level, Some(RiskLevel::Medium));
        assert_eq!(finding.area.label(), "Jurisdiction");
    }
}
