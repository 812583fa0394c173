use super::*;
use serde_json::json;

#[derive(Debug, Deserialize, JsonSchema)]
struct Note {
    /// Short title
    title: String,
    pages: u32,
}

fn note_schema() -> OutputSchema {
    OutputSchema::of::<Note>().unwrap()
}

#[test]
fn test_of_derives_required_fields() {
    let schema = note_schema();
    assert_eq!(schema.name(), "Note");
    assert_eq!(schema.schema()["type"], "object");
    let required = schema.schema()["required"].as_array().unwrap();
    assert!(required.contains(&json!("title")));
    assert!(required.contains(&json!("pages")));
    assert_eq!(schema.schema()["properties"]["title"]["description"], "Short title");
}

#[test]
fn test_describe_is_stable() {
    let schema = note_schema();
    assert_eq!(schema.describe(), schema.describe());
    assert_eq!(schema.describe(), note_schema().describe());
}

#[test]
fn test_validate_accepts_conforming_value() {
    assert!(note_schema().validate(&json!({"title": "a", "pages": 3})).is_ok());
}

#[test]
fn test_validate_names_missing_field() {
    let err = note_schema().validate(&json!({"title": "a"})).unwrap_err();
    assert_eq!(err.field(), Some("pages"));
}

#[test]
fn test_validate_names_mistyped_field() {
    let err = note_schema()
        .validate(&json!({"title": "a", "pages": "three"}))
        .unwrap_err();
    assert_eq!(err.field(), Some("pages"));
}

#[test]
fn test_validate_non_object_reports_root() {
    let err = note_schema().validate(&json!("just text")).unwrap_err();
    assert_eq!(err.field(), Some(ROOT_FIELD));
}

#[test]
fn test_parse_into_record() {
    let note: Note = note_schema().parse(json!({"title": "a", "pages": 3})).unwrap();
    assert_eq!(note.title, "a");
    assert_eq!(note.pages, 3);
}

#[test]
fn test_parse_text_plain_and_fenced() {
    let schema = note_schema();
    let plain = schema.parse_text(r#"{"title": "a", "pages": 1}"#).unwrap();
    assert_eq!(plain["pages"], 1);

    let fenced = schema
        .parse_text("```json\n{\"title\": \"b\", \"pages\": 2}\n```")
        .unwrap();
    assert_eq!(fenced["title"], "b");
}

#[test]
fn test_parse_text_malformed() {
    let err = note_schema().parse_text("Sure! Here is your note.").unwrap_err();
    assert!(matches!(err, SchemaError::MalformedJson(_)));
}

#[test]
fn test_invalid_schema() {
    let schema = OutputSchema::from_value("Broken", json!({"type": 12}));
    let err = schema.validate(&json!({})).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidSchema(_)));
}

#[test]
fn test_gemini_response_schema_strips_draft_marker() {
    let schema = note_schema();
    assert!(schema.schema().get("$schema").is_some());
    let gemini = schema.to_gemini_response_schema();
    assert!(gemini.get("$schema").is_none());
    assert!(gemini.get("title").is_none());
    assert_eq!(gemini["properties"], schema.schema()["properties"]);
}

#[test]
fn test_openai_response_format() {
    let format = note_schema().to_openai_response_format();
    assert_eq!(format["type"], "json_schema");
    assert_eq!(format["json_schema"]["name"], "Note");
}

#[test]
fn test_strip_code_fence() {
    assert_eq!(strip_code_fence("  {}  "), "{}");
    assert_eq!(strip_code_fence("```\n{}\n```"), "{}");
    assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```\n"), "{\"a\": 1}");
}

#[test]
fn test_validator_compiled_once_and_shared() {
    let schema = note_schema();
    assert!(schema.validator.get().is_none());
    let clone = schema.clone();

    schema.validate(&json!({"title": "a", "pages": 1})).unwrap();
    assert!(schema.validator.get().is_some());
    assert!(Arc::ptr_eq(&schema.validator, &clone.validator));
    assert!(clone.validator.get().is_some());

    let first = schema.compiled().unwrap() as *const Validator;
    let second = clone.compiled().unwrap() as *const Validator;
    assert_eq!(first, second);
}

#[test]
fn test_equality_ignores_compiled_state() {
    let compiled = note_schema();
    compiled.validate(&json!({"title": "a", "pages": 1})).unwrap();
    assert_eq!(compiled, note_schema());
    assert_ne!(compiled, OutputSchema::from_value("Note", json!({})));
}

#[test]
fn test_deserialized_schema_validates() {
    let json = serde_json::to_string(&note_schema()).unwrap();
    assert!(!json.contains("validator"));
    let schema: OutputSchema = serde_json::from_str(&json).unwrap();
    let err = schema.validate(&json!({"title": "a"})).unwrap_err();
    assert_eq!(err.field(), Some("pages"));
}
