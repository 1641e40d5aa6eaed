pub mod annotation;
pub mod error;
pub mod json_schema;
pub mod method;
pub mod model;
pub mod route;

pub use annotation::{Docs, MethodAnnotation, Op, Resp, ResponseSpec};
pub use error::DocsError;
pub use method::HttpMethod;
pub use model::{model, DataModel, FieldDescriptor, FieldType, ModelDescriptor, ModelRef};
pub use route::{App, RouteHook, RouteInfo};

pub use schemars;
