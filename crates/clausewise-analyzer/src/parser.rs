//! Parse LLM output into a checklist report

use crate::error::AnalyzerError;
use crate::types::ChecklistReport;
use clausewise_domain::RiskArea;
use tracing::debug;

/// Parse a checklist reply into a validated [`ChecklistReport`].
///
/// The reply must be a single JSON object with exactly the four checklist
/// keys, each a non-blank string. One surrounding markdown code fence is
/// tolerated; any other text before or after the object is rejected.
pub fn parse_checklist_response(response: &str) -> Result<ChecklistReport, AnalyzerError> {
    let malformed = |reason: String| AnalyzerError::MalformedChecklistResponse {
        reason,
        raw: response.to_string(),
    };

    let json_str = extract_json(response).map_err(malformed)?;

    let report: ChecklistReport =
        serde_json::from_str(json_str).map_err(|e| malformed(e.to_string()))?;

    for area in RiskArea::ALL {
        if report.summary(area).trim().is_empty() {
            return Err(malformed(format!("empty summary for `{}`", area.key())));
        }
    }

    debug!("Checklist reply validated");
    Ok(report)
}

/// Strip one markdown code fence, if the reply is wrapped in one
fn extract_json(response: &str) -> Result<&str, String> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return Err("empty response".to_string());
    }

    if !trimmed.starts_with("```") {
        return Ok(trimmed);
    }

    // Skip the opening line (``` or ```json) and require a closing fence
    let body = match trimmed.split_once('\n') {
        Some((_, rest)) => rest,
        None => return Err("empty code block".to_string()),
    };
    let body = body
        .trim_end()
        .strip_suffix("```")
        .ok_or_else(|| "unterminated code block".to_string())?;

    Ok(body.trim())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn parsing_is_idempotent(response in ".{0,300}") {
            let first = parse_checklist_response(&response).ok();
            let second = parse_checklist_response(&response).ok();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn valid_objects_round_trip(
            termination in "[a-zA-Z0-9 ]{1,40}[a-z]",
            liability in "[a-zA-Z0-9 ]{1,40}[a-z]",
            ip in "[a-zA-Z0-9 ]{1,40}[a-z]",
            law in "[a-zA-Z0-9 ]{1,40}[a-z]",
        ) {
            let report = ChecklistReport {
                termination,
                liability_cap: liability,
                ip_ownership: ip,
                jurisdiction: law,
            };
            let raw = serde_json::to_string(&report).unwrap();
            prop_assert_eq!(parse_checklist_response(&raw).unwrap(), report);
        }
    }
}
