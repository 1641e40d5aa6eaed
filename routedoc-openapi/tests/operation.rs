use routedoc_core::annotation::{MethodAnnotation, Op, Resp};
use routedoc_core::model;
use routedoc_openapi::{build_operation, SchemaRegistry};
use schemars::JsonSchema;
use serde_json::json;

#[derive(JsonSchema)]
#[allow(dead_code)]
struct TestSchema {
    hello: String,
    world: i32,
}

#[derive(JsonSchema)]
#[allow(dead_code)]
struct AnotherSchema {
    nintendo: String,
    atari: String,
}

fn json_ref(name: &str) -> serde_json::Value {
    json!({ "application/json": { "schema": { "$ref": format!("#/components/schemas/{name}") } } })
}

// ── Annotation shapes ───────────────────────────────────────────────────────

#[test]
fn absent_builds_nothing() {
    let mut registry = SchemaRegistry::new();
    let op = build_operation(&mut registry, &MethodAnnotation::Absent).unwrap();
    assert!(op.is_none());
    assert!(registry.is_empty());
}

#[test]
fn bare_model_is_default_response() {
    let mut registry = SchemaRegistry::new();
    let op = build_operation(&mut registry, &model::<TestSchema>().into())
        .unwrap()
        .unwrap();

    assert_eq!(
        op,
        json!({
            "responses": {
                "200": {
                    "description": "Success",
                    "content": json_ref("TestSchema")
                }
            }
        })
    );
    assert!(op.get("requestBody").is_none());
    assert!(registry.contains("TestSchema"));
}

#[test]
fn request_and_bare_response() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new()
        .request(model::<TestSchema>())
        .response(model::<AnotherSchema>())
        .into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    assert_eq!(
        op,
        json!({
            "requestBody": { "content": json_ref("TestSchema") },
            "responses": {
                "200": { "description": "Success", "content": json_ref("AnotherSchema") }
            }
        })
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn full_response_descriptor_is_verbatim() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new()
        .request(model::<AnotherSchema>())
        .response(
            Resp::new(model::<TestSchema>())
                .code(201)
                .description("Updated successfully!"),
        )
        .into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    let responses = op["responses"].as_object().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(
        responses["201"],
        json!({ "description": "Updated successfully!", "content": json_ref("TestSchema") })
    );
}

#[test]
fn response_without_model_has_no_content() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new()
        .response(Resp::no_content(204).description("Deleted"))
        .into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    assert_eq!(op, json!({ "responses": { "204": { "description": "Deleted" } } }));
    assert!(registry.is_empty());
}

// ── Independence ────────────────────────────────────────────────────────────

#[test]
fn response_only_has_no_request_body() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new().response(model::<TestSchema>()).into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    assert!(op.get("requestBody").is_none());
    assert!(op.get("responses").is_some());
}

#[test]
fn request_only_has_no_responses() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new().request(model::<TestSchema>()).into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    assert!(op.get("responses").is_none());
    assert_eq!(op["requestBody"]["content"], json_ref("TestSchema"));
}

#[test]
fn empty_descriptor_degrades_to_nothing() {
    let mut registry = SchemaRegistry::new();
    let op = build_operation(&mut registry, &Op::new().into()).unwrap();
    assert!(op.is_none());
}

#[test]
fn descriptor_metadata() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new()
        .description("Lists things")
        .tag("things")
        .deprecated(true)
        .into();
    let op = build_operation(&mut registry, &annotation).unwrap().unwrap();

    assert_eq!(
        op,
        json!({ "description": "Lists things", "tags": ["things"], "deprecated": true })
    );
}

// ── Determinism ─────────────────────────────────────────────────────────────

#[test]
fn building_twice_is_byte_identical() {
    let mut registry = SchemaRegistry::new();
    let annotation: MethodAnnotation = Op::new()
        .request(model::<AnotherSchema>())
        .response(model::<TestSchema>())
        .into();

    let first = build_operation(&mut registry, &annotation).unwrap();
    let second = build_operation(&mut registry, &annotation).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    assert_eq!(registry.len(), 2);
}

#[test]
fn resolution_failure_propagates() {
    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Untyped {
        anything: serde_json::Value,
    }

    let mut registry = SchemaRegistry::new();
    let err = build_operation(&mut registry, &model::<Untyped>().into()).unwrap_err();
    assert!(matches!(err, routedoc_core::DocsError::UnsupportedField { .. }));
}
