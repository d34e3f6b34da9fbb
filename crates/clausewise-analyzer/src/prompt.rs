//! Prompt construction for contract questions and the risk checklist

use clausewise_domain::{ChatRequest, RiskArea};

/// System instruction for free-form questions
pub const QA_SYSTEM_PROMPT: &str = "You are a helpful assistant that analyzes contracts and provides clear answers to questions about the contract.";

/// System instruction for the risk checklist
pub const CHECKLIST_SYSTEM_PROMPT: &str = "You are a careful contract-risk reviewer. You answer only with a single JSON object and never add prose outside it.";

/// Build the user message for a free-form question
pub fn build_question_prompt(contract: &str, question: &str) -> String {
    format!(
        "Here is the contract text:\n\n{}\n\nNow, please answer the following question about the contract:\n\n{}",
        contract, question
    )
}

/// Build the user message for the risk checklist
///
/// The message names every [`RiskArea`] key and spells out the exact JSON
/// object the model must return.
pub fn build_checklist_prompt(contract: &str) -> String {
    let mut prompt = String::new();

    // 1. Instructions, one line per area
    prompt.push_str(CHECKLIST_INSTRUCTIONS);
    prompt.push_str("\n\n");
    for area in RiskArea::ALL {
        prompt.push_str(&format!("- {}: {}\n", area.key(), area_guidance(area)));
    }
    prompt.push('\n');
    prompt.push_str(SUMMARY_RULES);
    prompt.push_str("\n\n");

    // 2. The contract
    prompt.push_str("Contract text:\n");
    prompt.push_str("---\n");
    prompt.push_str(contract);
    prompt.push_str("\n---\n\n");

    // 3. Output shape
    prompt.push_str("Output format (JSON object only, exactly these keys):\n");
    prompt.push_str(&checklist_skeleton());
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_FORMAT_REMINDER);

    prompt
}

/// Chat request for a free-form question
pub fn question_request(contract: &str, question: &str) -> ChatRequest {
    ChatRequest::new(QA_SYSTEM_PROMPT, build_question_prompt(contract, question))
}

/// Chat request for the risk checklist, in JSON mode
pub fn checklist_request(contract: &str) -> ChatRequest {
    ChatRequest::new(CHECKLIST_SYSTEM_PROMPT, build_checklist_prompt(contract)).with_json_mode()
}

fn area_guidance(area: RiskArea) -> &'static str {
    match area {
        RiskArea::Termination => {
            "notice periods, termination for convenience or cause, and what survives termination"
        }
        RiskArea::LiabilityCap => {
            "caps on damages, carve-outs, indemnities, and exclusions of consequential loss"
        }
        RiskArea::IpOwnership => {
            "who owns work product and pre-existing IP, and any licenses granted"
        }
        RiskArea::Jurisdiction => "governing law, venue, and dispute resolution",
    }
}

fn checklist_skeleton() -> String {
    let fields: Vec<String> = RiskArea::ALL
        .iter()
        .map(|area| format!("  \"{}\": \"summary (risk: low|medium|high)\"", area.key()))
        .collect();
    format!("{{\n{}\n}}", fields.join(",\n"))
}

const CHECKLIST_INSTRUCTIONS: &str =
    "Analyze the contract below for the following four risk areas:";

const SUMMARY_RULES: &str = r#"Rules:
- Write one or two sentences per area describing what the contract says
- If the contract is silent on an area, say so
- End every summary with an inline qualifier: (risk: low), (risk: medium) or (risk: high)
- Quote clause numbers when the contract has them"#;

const OUTPUT_FORMAT_REMINDER: &str =
    "Remember: Return ONLY valid JSON with exactly these four keys, no markdown code blocks, no explanations.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_layout() {
        let prompt = build_question_prompt("CONTRACT BODY", "Who pays shipping?");
        assert_eq!(
            prompt,
            "Here is the contract text:\n\nCONTRACT BODY\n\nNow, please answer the following question about the contract:\n\nWho pays shipping?"
        );
    }

    #[test]
    fn test_question_prompt_keeps_question_literal() {
        let question = "What does §4.2 say about \"net 30\"?";
        let prompt = build_question_prompt("text", question);
        assert!(prompt.ends_with(question));
    }

    #[test]
    fn test_checklist_prompt_contains_all_keys() {
        let prompt = build_checklist_prompt("Some contract");
        for key in ["termination", "liability_cap", "ip_ownership", "jurisdiction"] {
            assert!(prompt.contains(key), "missing key {}", key);
            assert!(prompt.contains(&format!("\"{}\":", key)));
        }
    }

    #[test]
    fn test_checklist_prompt_embeds_contract() {
        let prompt = build_checklist_prompt("Supplier may terminate on 90 days notice.");
        assert!(prompt.contains("---\nSupplier may terminate on 90 days notice.\n---"));
        assert!(prompt.contains("(risk: low)"));
        assert!(prompt.contains("Return ONLY valid JSON"));
    }

    #[test]
    fn test_checklist_prompt_with_empty_contract() {
        let prompt = build_checklist_prompt("");
        assert!(prompt.contains("jurisdiction"));
    }

    #[test]
    fn test_skeleton_is_valid_json_object() {
        let value: serde_json::Value = serde_json::from_str(&checklist_skeleton()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        for area in RiskArea::ALL {
            assert!(object.contains_key(area.key()));
        }
    }

    #[test]
    fn test_requests() {
        let qa = question_request("c", "q");
        assert_eq!(qa.system, QA_SYSTEM_PROMPT);
        assert!(!qa.json_mode);

        let checklist = checklist_request("c");
        assert_eq!(checklist.system, CHECKLIST_SYSTEM_PROMPT);
        assert!(checklist.json_mode);
    }
}
