use super::*;

#[test]
fn test_tool_definition_new() {
    let def = ToolDefinition::new("get_dad_joke", "Dad Joke", "Get a random dad joke.");
    assert_eq!(def.id, "get_dad_joke");
    assert_eq!(def.name, "Dad Joke");
    assert!(def.parameters_schema.is_none());
    assert_eq!(def.risk_level, RiskLevel::Low);
    assert!(def.metadata.is_empty());
}

#[test]
fn test_with_parameters_schema() {
    let def = ToolDefinition::new("t", "T", "d").with_parameters_schema(empty_object_schema());
    assert_eq!(def.parameters_schema.unwrap()["type"], "object");
}

#[test]
fn test_with_risk_level() {
    let def = ToolDefinition::new("t", "T", "d").with_risk_level(RiskLevel::High);
    assert_eq!(def.risk_level, RiskLevel::High);
}

#[test]
fn test_to_openai_function() {
    let def = ToolDefinition::new("get_dad_joke", "Dad Joke", "Get a random dad joke.");
    let func = def.to_openai_function();
    assert_eq!(func["type"], "function");
    assert_eq!(func["function"]["name"], "get_dad_joke");
    assert_eq!(func["function"]["description"], "Get a random dad joke.");
    assert_eq!(func["function"]["parameters"]["type"], "object");
}

#[test]
fn test_to_gemini_function() {
    let def = ToolDefinition::new("get_dad_joke", "Dad Joke", "Get a random dad joke.");
    let func = def.to_gemini_function();
    assert_eq!(func["name"], "get_dad_joke");
    assert!(func["parameters"]["properties"].as_object().unwrap().is_empty());
}

#[test]
fn test_definition_serialization_skips_missing_schema() {
    let def = ToolDefinition::new("t", "T", "d");
    let json = serde_json::to_value(&def).unwrap();
    assert!(json.get("parameters_schema").is_none());
    assert_eq!(json["risk_level"], "low");
}
