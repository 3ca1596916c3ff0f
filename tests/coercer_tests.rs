use prodmuse::coercer::{CoercionError, EMPTY_CONTENT_PLACEHOLDER, coerce_json_array, coerce_text};
use prodmuse::types::AgentTurnRecord;
use serde_json::Value;

#[test]
fn test_coerce_text_passes_content_through() {
    assert_eq!(coerce_text("# Hello\n\nWorld"), "# Hello\n\nWorld");
    assert_eq!(coerce_text("  padded  "), "padded");
}

#[test]
fn test_coerce_text_empty_gets_placeholder() {
    assert_eq!(coerce_text(""), EMPTY_CONTENT_PLACEHOLDER);
    assert_eq!(coerce_text("   \n\t"), EMPTY_CONTENT_PLACEHOLDER);
}

#[test]
fn test_coercion_idempotent_on_clean_json() {
    let clean = r#"[{"agent":"QA Agent","message":"Looks good"}]"#;
    let fenced = format!("```json\n{clean}\n```");

    let from_clean: Vec<Value> = coerce_json_array(clean).expect("clean parses");
    let from_fenced: Vec<Value> = coerce_json_array(&fenced).expect("fenced parses");

    assert_eq!(from_clean, from_fenced);
}

#[test]
fn test_coercion_strips_untagged_fences() {
    let fenced = "```\n[{\"agent\":\"UX Agent\",\"message\":\"hi\"}]\n```";
    let records: Vec<AgentTurnRecord> = coerce_json_array(fenced).expect("parses");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].agent, "UX Agent");
}

#[test]
fn test_coercion_slices_array_out_of_prose() {
    let chatty = "Sure! Here is your list:\n[{\"agent\":\"PM\",\"message\":\"ok\"}]\nHope that helps!";
    let records: Vec<AgentTurnRecord> = coerce_json_array(chatty).expect("parses");
    assert_eq!(records.len(), 1);
}

#[test]
fn test_coercion_failure_is_typed_with_preview() {
    let garbage = "The model had opinions instead of JSON.";
    let result: Result<Vec<AgentTurnRecord>, _> = coerce_json_array(garbage);

    match result {
        Err(CoercionError::InvalidJson { preview, .. }) => {
            assert!(preview.contains("opinions"));
        }
        Ok(records) => panic!("expected parse failure, got {} records", records.len()),
    }
}

#[test]
fn test_coercion_empty_array_is_ok() {
    // "The model legitimately produced zero items" stays distinguishable
    // from a parse failure.
    let records: Vec<AgentTurnRecord> = coerce_json_array("[]").expect("parses");
    assert!(records.is_empty());
}
