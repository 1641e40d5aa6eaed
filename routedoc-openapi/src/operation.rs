use crate::schema::{Reference, ResolveModel};
use routedoc_core::annotation::{MethodAnnotation, Op, Resp};
use routedoc_core::DocsError;
use serde_json::{json, Map, Value};

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Build the Operation Object for one method annotation.
///
/// Returns `Ok(None)` when there is nothing to document: the annotation is
/// absent, or an operation descriptor carries nothing at all. Every model
/// the annotation mentions is resolved through `resolver`, so the
/// referenced component schemas exist once this returns `Ok`.
pub fn build_operation<R: ResolveModel + ?Sized>(
    resolver: &mut R,
    annotation: &MethodAnnotation,
) -> Result<Option<Value>, DocsError> {
    match annotation {
        MethodAnnotation::Absent => Ok(None),
        MethodAnnotation::Model(model) => {
            let resp = Resp::new(*model);
            let mut operation = Map::new();
            operation.insert("responses".into(), responses(resolver, &resp)?);
            Ok(Some(Value::Object(operation)))
        }
        MethodAnnotation::Operation(op) => build_descriptor(resolver, op),
    }
}

fn build_descriptor<R: ResolveModel + ?Sized>(
    resolver: &mut R,
    op: &Op,
) -> Result<Option<Value>, DocsError> {
    if op.is_empty() {
        tracing::warn!("operation descriptor documents nothing; skipping");
        return Ok(None);
    }

    let mut operation = Map::new();

    if let Some(ref description) = op.description {
        operation.insert("description".into(), json!(description));
    }

    if !op.tags.is_empty() {
        operation.insert("tags".into(), json!(op.tags));
    }

    if let Some(request) = op.request {
        let reference = resolver.resolve(request)?;
        operation.insert(
            "requestBody".into(),
            json!({ "content": json_content(&reference) }),
        );
    }

    if let Some(ref response) = op.response {
        operation.insert("responses".into(), responses(resolver, &response.normalize())?);
    }

    if op.deprecated {
        operation.insert("deprecated".into(), json!(true));
    }

    Ok(Some(Value::Object(operation)))
}

/// Responses map with exactly one status key.
fn responses<R: ResolveModel + ?Sized>(resolver: &mut R, resp: &Resp) -> Result<Value, DocsError> {
    let mut response = Map::new();
    response.insert("description".into(), json!(resp.description));

    if let Some(model) = resp.model {
        let reference = resolver.resolve(model)?;
        response.insert("content".into(), json_content(&reference));
    }

    let mut responses = Map::new();
    responses.insert(resp.code.to_string(), Value::Object(response));
    Ok(Value::Object(responses))
}

fn json_content(reference: &Reference) -> Value {
    let mut content = Map::new();
    content.insert(JSON_CONTENT_TYPE.into(), json!({ "schema": reference }));
    Value::Object(content)
}
