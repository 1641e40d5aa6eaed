mod config;
mod ext;
pub mod operation;
pub mod path;
pub mod schema;
mod spec;

pub use config::{OpenApiConfig, DEFAULT_OPENAPI_VERSION};
pub use ext::SpecHandle;
pub use operation::build_operation;
pub use path::{contribute_path, merge_path_item, ContributePath};
pub use schema::{Reference, ResolveModel, SchemaRegistry};
pub use spec::ApiSpec;
