//! Data-model capability.
//!
//! The OpenAPI side never looks at a concrete Rust type. It only needs a
//! canonical name and an ordered list of typed fields, which any type can
//! provide through one of two routes:
//!
//! - implement [`DataModel`] by hand and build a [`ModelDescriptor`];
//! - derive `schemars::JsonSchema` and let the descriptor be read off the
//!   generated JSON Schema (see [`ModelRef::schema`]).
//!
//! Either way the type is handed around as a [`ModelRef`], a `Copy` handle
//! that annotations store instead of the type itself.

use crate::error::DocsError;
use std::any::TypeId;
use std::borrow::Cow;

/// Semantic type of a model field, mapped one-to-one onto JSON Schema
/// primitives when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array(Box<FieldType>),
    /// Another model, referenced by its canonical name.
    Model(String),
}

impl FieldType {
    pub fn array(items: FieldType) -> Self {
        FieldType::Array(Box::new(items))
    }

    pub fn model(name: impl Into<String>) -> Self {
        FieldType::Model(name.into())
    }

    /// JSON Schema `type` keyword for this field, `None` for model references.
    pub fn json_type(&self) -> Option<&'static str> {
        match self {
            FieldType::String => Some("string"),
            FieldType::Integer => Some("integer"),
            FieldType::Number => Some("number"),
            FieldType::Boolean => Some("boolean"),
            FieldType::Object => Some("object"),
            FieldType::Array(_) => Some("array"),
            FieldType::Model(_) => None,
        }
    }
}

/// One declared field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: FieldType,
    /// `false` when the field has a default value.
    pub required: bool,
    pub description: Option<String>,
}

impl FieldDescriptor {
    pub fn required(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: true,
            description: None,
        }
    }

    pub fn optional(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            required: false,
            ..Self::required(name, ty)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Everything the schema resolver needs to know about a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub name: String,
    pub description: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Models referenced through [`FieldType::Model`], described alongside
    /// so they can be registered as components too.
    pub definitions: Vec<ModelDescriptor>,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn definition(mut self, nested: ModelDescriptor) -> Self {
        self.definitions.push(nested);
        self
    }

    /// Names of required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}

/// Hand-written model description.
///
/// # Example
///
/// ```
/// use routedoc_core::model::{DataModel, FieldDescriptor, FieldType, ModelDescriptor};
/// use routedoc_core::DocsError;
/// use std::borrow::Cow;
///
/// struct Pet;
///
/// impl DataModel for Pet {
///     fn model_name() -> Cow<'static, str> {
///         "Pet".into()
///     }
///
///     fn describe() -> Result<ModelDescriptor, DocsError> {
///         Ok(ModelDescriptor::new("Pet")
///             .field(FieldDescriptor::required("name", FieldType::String))
///             .field(FieldDescriptor::optional("age", FieldType::Integer)))
///     }
/// }
/// ```
pub trait DataModel {
    /// Canonical component name, e.g. `"Pet"`.
    fn model_name() -> Cow<'static, str>;

    /// Describe the model's fields.
    fn describe() -> Result<ModelDescriptor, DocsError>;
}

/// A copyable handle to a data-model type.
///
/// Two handles are equal when they point at the same Rust type.
#[derive(Clone, Copy)]
pub struct ModelRef {
    type_id: TypeId,
    type_name: &'static str,
    name: fn() -> Cow<'static, str>,
    describe: fn() -> Result<ModelDescriptor, DocsError>,
}

impl ModelRef {
    /// Handle to a type implementing [`DataModel`].
    pub fn of<T: DataModel + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            name: T::model_name,
            describe: T::describe,
        }
    }

    /// Handle to a type deriving `schemars::JsonSchema`.
    pub fn schema<T: schemars::JsonSchema + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            name: <T as schemars::JsonSchema>::schema_name,
            describe: crate::json_schema::describe::<T>,
        }
    }

    /// Canonical component name.
    pub fn name(&self) -> Cow<'static, str> {
        (self.name)()
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Rust type path, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn describe(&self) -> Result<ModelDescriptor, DocsError> {
        (self.describe)()
    }
}

impl PartialEq for ModelRef {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelRef {}

impl std::fmt::Debug for ModelRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ModelRef").field(&self.type_name).finish()
    }
}

/// Shorthand for [`ModelRef::schema`].
pub fn model<T: schemars::JsonSchema + 'static>() -> ModelRef {
    ModelRef::schema::<T>()
}
