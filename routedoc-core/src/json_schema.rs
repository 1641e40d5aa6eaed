//! Reads a [`ModelDescriptor`] off a schemars-generated JSON Schema.
//!
//! schemars 1.x emits Draft 2020-12: nested types live under `$defs` and
//! are referenced as `#/$defs/X`, optional fields are `["T", "null"]` or an
//! `anyOf` with a `null` branch. Everything that reduces to a single JSON
//! type is accepted; anything else is reported as an unsupported field.

use crate::error::DocsError;
use crate::model::{FieldDescriptor, FieldType, ModelDescriptor};
use serde_json::{Map, Value};
use std::collections::HashSet;

const DEFS_PREFIX: &str = "#/$defs/";

pub(crate) fn describe<T: schemars::JsonSchema>() -> Result<ModelDescriptor, DocsError> {
    let name = T::schema_name().into_owned();
    let root = serde_json::to_value(schemars::schema_for!(T))
        .map_err(|e| DocsError::invalid(&name, e.to_string()))?;
    describe_value(&name, &root)
}

/// Describe a model from an already generated JSON Schema document.
pub fn describe_value(name: &str, root: &Value) -> Result<ModelDescriptor, DocsError> {
    let empty = Map::new();
    let mut walker = Walker {
        root: name,
        defs: root.get("$defs").and_then(Value::as_object).unwrap_or(&empty),
        definitions: Vec::new(),
        seen: HashSet::from([name.to_string()]),
    };
    let mut desc = walker.object(name, root)?;
    desc.definitions = walker.definitions;
    Ok(desc)
}

struct Walker<'a> {
    root: &'a str,
    defs: &'a Map<String, Value>,
    definitions: Vec<ModelDescriptor>,
    seen: HashSet<String>,
}

impl Walker<'_> {
    fn object(&mut self, model: &str, schema: &Value) -> Result<ModelDescriptor, DocsError> {
        let obj = schema
            .as_object()
            .filter(|obj| is_object_schema(obj))
            .ok_or_else(|| DocsError::invalid(model, "not an object schema"))?;

        let required: Vec<&str> = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut desc = ModelDescriptor::new(model);
        desc.description = description_of(schema);

        if let Some(props) = obj.get("properties").and_then(Value::as_object) {
            for (field, prop) in props {
                let ty = self.field_type(model, field, prop)?;
                desc.fields.push(FieldDescriptor {
                    name: field.clone(),
                    ty,
                    required: required.contains(&field.as_str()),
                    description: description_of(prop),
                });
            }
        }

        Ok(desc)
    }

    fn field_type(
        &mut self,
        model: &str,
        field: &str,
        schema: &Value,
    ) -> Result<FieldType, DocsError> {
        if let Some(reference) = schema.get("$ref").and_then(Value::as_str) {
            return self.reference(model, field, reference);
        }

        for key in ["anyOf", "oneOf", "allOf"] {
            if let Some(variants) = schema.get(key).and_then(Value::as_array) {
                let non_null: Vec<&Value> = variants.iter().filter(|v| !is_null(v)).collect();
                return match non_null.as_slice() {
                    [single] => self.field_type(model, field, single),
                    [first, rest @ ..] if shares_scalar_type(first, rest) => {
                        self.field_type(model, field, first)
                    }
                    _ => Err(DocsError::unsupported(
                        model,
                        field,
                        format!("`{key}` with {} alternatives", non_null.len()),
                    )),
                };
            }
        }

        let ty = match schema.get("type") {
            Some(Value::String(ty)) => ty.as_str(),
            Some(Value::Array(types)) => {
                let non_null: Vec<&str> = types
                    .iter()
                    .filter_map(Value::as_str)
                    .filter(|ty| *ty != "null")
                    .collect();
                match non_null.as_slice() {
                    [single] => *single,
                    _ => {
                        return Err(DocsError::unsupported(
                            model,
                            field,
                            format!("union of types {non_null:?}"),
                        ))
                    }
                }
            }
            _ => return Err(DocsError::unsupported(model, field, "no JSON Schema type")),
        };

        match ty {
            "string" => Ok(FieldType::String),
            "integer" => Ok(FieldType::Integer),
            "number" => Ok(FieldType::Number),
            "boolean" => Ok(FieldType::Boolean),
            "object" => Ok(FieldType::Object),
            "array" => {
                let items = schema
                    .get("items")
                    .ok_or_else(|| DocsError::unsupported(model, field, "array without `items`"))?;
                Ok(FieldType::array(self.field_type(model, field, items)?))
            }
            other => Err(DocsError::unsupported(model, field, format!("type `{other}`"))),
        }
    }

    fn reference(
        &mut self,
        model: &str,
        field: &str,
        reference: &str,
    ) -> Result<FieldType, DocsError> {
        if reference == "#" {
            return Ok(FieldType::model(self.root));
        }

        let name = reference.strip_prefix(DEFS_PREFIX).ok_or_else(|| {
            DocsError::unsupported(model, field, format!("external reference `{reference}`"))
        })?;
        let defs = self.defs;
        let def = defs.get(name).ok_or_else(|| {
            DocsError::unsupported(model, field, format!("dangling reference `{reference}`"))
        })?;

        // Enums and other scalar definitions are inlined as their primitive.
        if !def.as_object().is_some_and(is_object_schema) {
            return self.field_type(model, field, def);
        }

        if self.seen.insert(name.to_string()) {
            let nested = self.object(name, def)?;
            self.definitions.push(nested);
        }
        Ok(FieldType::model(name))
    }
}

fn is_object_schema(obj: &Map<String, Value>) -> bool {
    obj.get("type").and_then(Value::as_str) == Some("object") || obj.contains_key("properties")
}

/// Documented unit enums come out as one `{"type": "string", "const": ..}`
/// branch per variant.
fn shares_scalar_type(first: &Value, rest: &[&Value]) -> bool {
    fn scalar(schema: &Value) -> Option<&str> {
        schema
            .get("type")
            .and_then(Value::as_str)
            .filter(|ty| matches!(*ty, "string" | "integer" | "number" | "boolean"))
    }

    match scalar(first) {
        Some(ty) => rest.iter().all(|alt| scalar(*alt) == Some(ty)),
        None => false,
    }
}

fn is_null(schema: &Value) -> bool {
    schema.get("type").and_then(Value::as_str) == Some("null")
}

fn description_of(schema: &Value) -> Option<String> {
    schema
        .get("description")
        .and_then(Value::as_str)
        .map(str::to_string)
}
