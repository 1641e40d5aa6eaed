use routedoc::prelude::*;
use serde_json::{json, Value};

#[derive(schemars::JsonSchema)]
#[allow(dead_code)]
struct TestSchema {
    hello: String,
    world: i32,
}

#[derive(schemars::JsonSchema)]
#[allow(dead_code)]
struct AnotherSchema {
    nintendo: String,
    atari: String,
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn setup() -> (App, SpecHandle) {
    routedoc::init_tracing();
    let mut app = App::new("test");
    let spec = ApiSpec::new(OpenApiConfig::new("Test Schema", "0.0.0").with_openapi_version("3.0.1"))
        .attach(&mut app)
        .unwrap();
    (app, spec)
}

fn test_schema() -> Value {
    json!({
        "title": "TestSchema",
        "type": "object",
        "properties": {
            "hello": {"title": "Hello", "type": "string"},
            "world": {"title": "World", "type": "integer"}
        },
        "required": ["hello", "world"]
    })
}

fn another_schema() -> Value {
    json!({
        "title": "AnotherSchema",
        "type": "object",
        "properties": {
            "nintendo": {"title": "Nintendo", "type": "string"},
            "atari": {"title": "Atari", "type": "string"}
        },
        "required": ["nintendo", "atari"]
    })
}

fn json_body(name: &str) -> Value {
    json!({
        "application/json": {
            "schema": {"$ref": format!("#/components/schemas/{name}")}
        }
    })
}

// ── End-to-end documents ────────────────────────────────────────────────────

#[test]
fn undocumented_route_still_registers() {
    let (mut app, spec) = setup();
    app.route(RouteInfo::parse("/", ["GET"]).unwrap()).unwrap();

    assert_eq!(app.routes().len(), 1);
    assert_eq!(
        spec.to_value(),
        json!({
            "paths": {},
            "info": {"title": "Test Schema", "version": "0.0.0"},
            "openapi": "3.0.1"
        })
    );
}

#[test]
fn response_from_model_only() {
    let (mut app, spec) = setup();
    app.route(
        RouteInfo::parse("/", ["GET"])
            .unwrap()
            .with_docs(Docs::new().get(model::<TestSchema>())),
    )
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "paths": {
                "/": {
                    "get": {
                        "responses": {
                            "200": {"description": "Success", "content": json_body("TestSchema")}
                        }
                    }
                }
            },
            "info": {"title": "Test Schema", "version": "0.0.0"},
            "openapi": "3.0.1",
            "components": {"schemas": {"TestSchema": test_schema()}}
        })
    );
}

#[test]
fn request_and_response_from_models() {
    let (mut app, spec) = setup();
    app.route(
        RouteInfo::parse("/test", ["GET", "POST"]).unwrap().with_docs(
            Docs::new().post(
                Op::new()
                    .request(model::<TestSchema>())
                    .response(model::<AnotherSchema>()),
            ),
        ),
    )
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "paths": {
                "/test": {
                    "post": {
                        "requestBody": {"content": json_body("TestSchema")},
                        "responses": {
                            "200": {"description": "Success", "content": json_body("AnotherSchema")}
                        }
                    }
                }
            },
            "info": {"title": "Test Schema", "version": "0.0.0"},
            "openapi": "3.0.1",
            "components": {
                "schemas": {
                    "TestSchema": test_schema(),
                    "AnotherSchema": another_schema()
                }
            }
        })
    );
}

#[test]
fn full_operation_with_custom_response() {
    let (mut app, spec) = setup();
    app.route(
        RouteInfo::parse("/ops", ["GET", "POST"]).unwrap().with_docs(
            Docs::new().post(
                Op::new().request(model::<AnotherSchema>()).response(
                    Resp::new(model::<TestSchema>())
                        .code(201)
                        .description("Updated successfully!"),
                ),
            ),
        ),
    )
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "paths": {
                "/ops": {
                    "post": {
                        "requestBody": {"content": json_body("AnotherSchema")},
                        "responses": {
                            "201": {
                                "description": "Updated successfully!",
                                "content": json_body("TestSchema")
                            }
                        }
                    }
                }
            },
            "info": {"title": "Test Schema", "version": "0.0.0"},
            "openapi": "3.0.1",
            "components": {
                "schemas": {
                    "AnotherSchema": another_schema(),
                    "TestSchema": test_schema()
                }
            }
        })
    );
}

#[test]
fn summary_only() {
    let (mut app, spec) = setup();
    app.route(
        RouteInfo::parse("/summaries", ["GET"])
            .unwrap()
            .with_docs(Docs::new().summary("This is a summary of an API request.")),
    )
    .unwrap();

    assert_eq!(
        spec.to_value(),
        json!({
            "paths": {"/summaries": {"summary": "This is a summary of an API request."}},
            "info": {"title": "Test Schema", "version": "0.0.0"},
            "openapi": "3.0.1"
        })
    );
}

// ── Shared registry across routes ───────────────────────────────────────────

#[test]
fn model_reused_across_routes_is_one_component() {
    let (mut app, spec) = setup();
    app.route(
        RouteInfo::parse("/a", ["GET"])
            .unwrap()
            .with_docs(Docs::new().get(model::<TestSchema>())),
    )
    .unwrap();
    app.route(
        RouteInfo::parse("/b", ["PUT"]).unwrap().with_docs(
            Docs::new().put(
                Op::new()
                    .request(model::<TestSchema>())
                    .response(model::<TestSchema>()),
            ),
        ),
    )
    .unwrap();

    let doc = spec.to_value();
    assert_eq!(doc["components"]["schemas"], json!({"TestSchema": test_schema()}));
    assert_eq!(
        doc["paths"]["/b"]["put"]["requestBody"]["content"],
        json_body("TestSchema")
    );
}

#[test]
fn independent_documents_do_not_share_schemas() {
    let (mut first_app, first) = setup();
    let (_, second) = setup();

    first_app
        .route(
            RouteInfo::parse("/", ["GET"])
                .unwrap()
                .with_docs(Docs::new().get(model::<TestSchema>())),
        )
        .unwrap();

    assert!(first.with(|spec| spec.schemas().contains("TestSchema")));
    assert!(second.with(|spec| spec.schemas().is_empty()));
}

// ── Tracing ─────────────────────────────────────────────────────────────────

#[test]
fn init_tracing_twice_is_harmless() {
    routedoc::init_tracing();
    routedoc::init_tracing();
}
