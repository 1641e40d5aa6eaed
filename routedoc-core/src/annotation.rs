//! The documentation a route author attaches to a route.
//!
//! ```
//! # use routedoc_core::annotation::{Docs, Op, Resp};
//! # use routedoc_core::model::model;
//! # #[derive(schemars::JsonSchema)] struct NewPet { name: String }
//! # #[derive(schemars::JsonSchema)] struct Pet { id: i64, name: String }
//! let docs = Docs::new()
//!     .summary("Pets")
//!     .get(model::<Pet>())
//!     .post(
//!         Op::new()
//!             .request(model::<NewPet>())
//!             .response(Resp::new(model::<Pet>()).code(201).description("Created")),
//!     );
//! ```

use crate::method::HttpMethod;
use crate::model::ModelRef;
use std::collections::BTreeMap;

pub const DEFAULT_STATUS: u16 = 200;
pub const DEFAULT_DESCRIPTION: &str = "Success";

static ABSENT: MethodAnnotation = MethodAnnotation::Absent;

/// Documentation for one HTTP method of a route.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MethodAnnotation {
    /// The method returns this model with a 200 response and takes no body.
    Model(ModelRef),
    /// Full request/response description.
    Operation(Op),
    /// Declared on the route but undocumented.
    #[default]
    Absent,
}

impl MethodAnnotation {
    pub fn is_absent(&self) -> bool {
        matches!(self, MethodAnnotation::Absent)
    }
}

impl From<ModelRef> for MethodAnnotation {
    fn from(model: ModelRef) -> Self {
        MethodAnnotation::Model(model)
    }
}

impl From<Op> for MethodAnnotation {
    fn from(op: Op) -> Self {
        MethodAnnotation::Operation(op)
    }
}

impl<T: Into<MethodAnnotation>> From<Option<T>> for MethodAnnotation {
    fn from(value: Option<T>) -> Self {
        value.map_or(MethodAnnotation::Absent, Into::into)
    }
}

/// Operation descriptor: an optional request model and an optional response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Op {
    pub request: Option<ModelRef>,
    pub response: Option<ResponseSpec>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub deprecated: bool,
}

impl Op {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(mut self, model: ModelRef) -> Self {
        self.request = Some(model);
        self
    }

    pub fn response(mut self, response: impl Into<ResponseSpec>) -> Self {
        self.response = Some(response.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn deprecated(mut self, deprecated: bool) -> Self {
        self.deprecated = deprecated;
        self
    }

    /// `true` when the descriptor carries nothing that could be documented.
    pub fn is_empty(&self) -> bool {
        self.request.is_none()
            && self.response.is_none()
            && self.description.is_none()
            && self.tags.is_empty()
            && !self.deprecated
    }
}

/// The response half of an [`Op`]: a bare model or a full [`Resp`].
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSpec {
    Model(ModelRef),
    Full(Resp),
}

impl ResponseSpec {
    /// A bare model becomes `Resp { code: 200, description: "Success", model }`.
    pub fn normalize(&self) -> Resp {
        match self {
            ResponseSpec::Model(model) => Resp::new(*model),
            ResponseSpec::Full(resp) => resp.clone(),
        }
    }
}

impl From<ModelRef> for ResponseSpec {
    fn from(model: ModelRef) -> Self {
        ResponseSpec::Model(model)
    }
}

impl From<Resp> for ResponseSpec {
    fn from(resp: Resp) -> Self {
        ResponseSpec::Full(resp)
    }
}

/// Response descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Resp {
    pub code: u16,
    pub description: String,
    /// Body model, `None` for responses without content.
    pub model: Option<ModelRef>,
}

impl Resp {
    pub fn new(model: ModelRef) -> Self {
        Self {
            code: DEFAULT_STATUS,
            description: DEFAULT_DESCRIPTION.to_string(),
            model: Some(model),
        }
    }

    /// A response with a status and description but no body, e.g. 204.
    pub fn no_content(code: u16) -> Self {
        Self {
            code,
            description: DEFAULT_DESCRIPTION.to_string(),
            model: None,
        }
    }

    pub fn code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Per-route documentation bundle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Docs {
    methods: BTreeMap<HttpMethod, MethodAnnotation>,
    summary: Option<String>,
    description: Option<String>,
}

impl Docs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document `method`. A later call for the same method replaces the
    /// earlier annotation.
    pub fn method(mut self, method: HttpMethod, annotation: impl Into<MethodAnnotation>) -> Self {
        self.methods.insert(method, annotation.into());
        self
    }

    pub fn get(self, annotation: impl Into<MethodAnnotation>) -> Self {
        self.method(HttpMethod::Get, annotation)
    }

    pub fn post(self, annotation: impl Into<MethodAnnotation>) -> Self {
        self.method(HttpMethod::Post, annotation)
    }

    pub fn put(self, annotation: impl Into<MethodAnnotation>) -> Self {
        self.method(HttpMethod::Put, annotation)
    }

    pub fn patch(self, annotation: impl Into<MethodAnnotation>) -> Self {
        self.method(HttpMethod::Patch, annotation)
    }

    pub fn delete(self, annotation: impl Into<MethodAnnotation>) -> Self {
        self.method(HttpMethod::Delete, annotation)
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Annotation for `method`, [`MethodAnnotation::Absent`] when the bundle
    /// does not mention it.
    pub fn annotation(&self, method: HttpMethod) -> &MethodAnnotation {
        self.methods.get(&method).unwrap_or(&ABSENT)
    }

    /// Methods mentioned by this bundle.
    pub fn documented_methods(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.methods.keys().copied()
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
