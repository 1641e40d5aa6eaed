use routedoc_core::model::{FieldDescriptor, FieldType, ModelDescriptor, ModelRef};
use routedoc_core::DocsError;
use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::any::TypeId;
use std::collections::HashMap;

pub const COMPONENTS_PREFIX: &str = "#/components/schemas/";

/// Symbolic pointer to a named entry of the schema registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    name: String,
}

impl Reference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `#/components/schemas/<name>`
    pub fn pointer(&self) -> String {
        format!("{COMPONENTS_PREFIX}{}", self.name)
    }

    /// `{"$ref": "#/components/schemas/<name>"}`
    pub fn to_value(&self) -> Value {
        json!({ "$ref": self.pointer() })
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

/// Turns a model into a reference to its registered component schema.
pub trait ResolveModel {
    fn resolve(&mut self, model: ModelRef) -> Result<Reference, DocsError>;
}

/// Where a registered entry came from.
enum Origin {
    /// Resolved as a root model of this Rust type.
    Model {
        type_id: TypeId,
        type_name: &'static str,
    },
    /// Rendered as a nested definition while resolving `parent`.
    Nested { parent: &'static str },
}

impl Origin {
    fn describe(&self) -> String {
        match self {
            Origin::Model { type_name, .. } => type_name.to_string(),
            Origin::Nested { parent } => format!("a definition nested in {parent}"),
        }
    }
}

/// Registry that collects the component schemas of one document.
///
/// Entries are only ever added. Resolving a model whose name is already
/// owned by the same type returns a reference to the existing entry without
/// describing the model again. A name may only ever stand for one schema:
/// a model or nested definition whose rendering differs from the entry
/// already stored under its name is a [`DocsError::SchemaCollision`].
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: Map<String, Value>,
    origins: HashMap<String, Origin>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema definition under the given name, replacing any
    /// previous entry.
    pub fn register(&mut self, name: &str, schema: Value) {
        self.schemas.insert(name.to_string(), schema);
    }

    /// Check if a schema is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.schemas.iter()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.schemas
    }

    /// Consume the registry and return the schemas map for embedding
    /// in the OpenAPI spec.
    pub fn into_schemas(self) -> Map<String, Value> {
        self.schemas
    }

    /// Fails when `name` already holds a schema other than `schema`.
    fn check_free(&self, name: &str, schema: &Value, incoming: &str) -> Result<(), DocsError> {
        match self.schemas.get(name) {
            Some(existing) if existing != schema => Err(DocsError::SchemaCollision {
                name: name.to_string(),
                existing: self
                    .origins
                    .get(name)
                    .map_or_else(|| "a registered schema".to_string(), Origin::describe),
                incoming: incoming.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl ResolveModel for SchemaRegistry {
    fn resolve(&mut self, model: ModelRef) -> Result<Reference, DocsError> {
        let name = model.name();

        match self.origins.get(&*name) {
            Some(Origin::Model { type_id, .. }) if *type_id == model.type_id() => {
                tracing::trace!(schema = %name, "schema already registered");
                return Ok(Reference::new(name));
            }
            Some(Origin::Model { type_name, .. }) => {
                return Err(DocsError::SchemaCollision {
                    name: name.to_string(),
                    existing: type_name.to_string(),
                    incoming: model.type_name().to_string(),
                });
            }
            // Nested entries are checked against a fresh rendering below.
            Some(Origin::Nested { .. }) => {}
            None if self.schemas.contains_key(&*name) => {
                tracing::trace!(schema = %name, "adopting registered schema");
                self.origins.insert(name.to_string(), model_origin(&model));
                return Ok(Reference::new(name));
            }
            None => {}
        }

        let desc = model.describe()?;
        let schema = model_schema(&desc);
        let mut nested = Vec::new();
        collect_definitions(&desc.definitions, &mut nested);

        self.check_free(&name, &schema, model.type_name())?;
        for (nested_name, nested_schema) in &nested {
            self.check_free(
                nested_name,
                nested_schema,
                &format!("a definition nested in {}", model.type_name()),
            )?;
        }

        for (nested_name, nested_schema) in nested {
            if !self.schemas.contains_key(&nested_name) {
                tracing::debug!(schema = %nested_name, parent = %name, "registered nested schema");
                self.origins.insert(
                    nested_name.clone(),
                    Origin::Nested {
                        parent: model.type_name(),
                    },
                );
                self.schemas.insert(nested_name, nested_schema);
            }
        }
        self.schemas.insert(name.to_string(), schema);
        self.origins.insert(name.to_string(), model_origin(&model));

        tracing::debug!(schema = %name, model = model.type_name(), fields = desc.fields.len(), "registered schema");
        Ok(Reference::new(name))
    }
}

impl std::fmt::Debug for SchemaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaRegistry")
            .field("schemas", &self.schemas.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn model_origin(model: &ModelRef) -> Origin {
    Origin::Model {
        type_id: model.type_id(),
        type_name: model.type_name(),
    }
}

fn collect_definitions(definitions: &[ModelDescriptor], out: &mut Vec<(String, Value)>) {
    for nested in definitions {
        out.push((nested.name.clone(), model_schema(nested)));
        collect_definitions(&nested.definitions, out);
    }
}

/// Render a model as a component Schema Object.
pub fn model_schema(desc: &ModelDescriptor) -> Value {
    let mut schema = Map::new();
    schema.insert("title".into(), json!(desc.name));
    if let Some(ref description) = desc.description {
        schema.insert("description".into(), json!(description));
    }
    schema.insert("type".into(), json!("object"));

    let properties: Map<String, Value> = desc
        .fields
        .iter()
        .map(|field| (field.name.clone(), field_schema(field)))
        .collect();
    schema.insert("properties".into(), Value::Object(properties));

    let required: Vec<&str> = desc.required_fields().collect();
    if !required.is_empty() {
        schema.insert("required".into(), json!(required));
    }

    Value::Object(schema)
}

fn field_schema(field: &FieldDescriptor) -> Value {
    if let FieldType::Model(ref name) = field.ty {
        return Reference::new(name.as_str()).to_value();
    }

    let mut schema = Map::new();
    schema.insert("title".into(), json!(field_title(&field.name)));
    if let Some(ref description) = field.description {
        schema.insert("description".into(), json!(description));
    }
    if let Value::Object(ty) = type_schema(&field.ty) {
        schema.extend(ty);
    }
    Value::Object(schema)
}

fn type_schema(ty: &FieldType) -> Value {
    match ty {
        FieldType::Model(name) => Reference::new(name.as_str()).to_value(),
        FieldType::Array(items) => json!({ "type": "array", "items": type_schema(items) }),
        other => json!({ "type": other.json_type() }),
    }
}

/// `first_name` -> `First Name`
fn field_title(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
