//! routedoc prelude. Import everything you need with a single `use`.
//!
//! ```ignore
//! use routedoc::prelude::*;
//!
//! #[derive(JsonSchema)]
//! struct Pet {
//!     name: String,
//! }
//!
//! let mut app = App::new("pets");
//! let spec = ApiSpec::new(OpenApiConfig::new("Pets", "1.0.0")).attach(&mut app)?;
//! app.route(RouteInfo::new("/pets", [HttpMethod::Get]).with_docs(Docs::new().get(model::<Pet>())))?;
//! ```

pub use routedoc_core::annotation::{Docs, MethodAnnotation, Op, Resp, ResponseSpec};
pub use routedoc_core::model::{
    model, DataModel, FieldDescriptor, FieldType, ModelDescriptor, ModelRef,
};
pub use routedoc_core::{App, DocsError, HttpMethod, RouteHook, RouteInfo};

pub use routedoc_core::schemars::JsonSchema;

#[cfg(feature = "openapi")]
pub use routedoc_openapi::{
    ApiSpec, ContributePath, OpenApiConfig, Reference, ResolveModel, SchemaRegistry, SpecHandle,
};
