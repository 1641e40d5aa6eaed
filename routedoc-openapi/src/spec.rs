use crate::config::OpenApiConfig;
use crate::ext::SpecHandle;
use crate::path::{contribute_path, ContributePath};
use crate::schema::{Reference, ResolveModel, SchemaRegistry};
use routedoc_core::model::ModelRef;
use routedoc_core::{App, Docs, DocsError, HttpMethod};
use serde_json::{json, Map, Value};

/// A specification document under construction.
///
/// Owns the paths table and the component schema registry. Both only grow
/// while routes are contributed.
#[derive(Debug)]
pub struct ApiSpec {
    config: OpenApiConfig,
    paths: Map<String, Value>,
    schemas: SchemaRegistry,
}

impl ApiSpec {
    pub fn new(config: OpenApiConfig) -> Self {
        Self {
            config,
            paths: Map::new(),
            schemas: SchemaRegistry::new(),
        }
    }

    pub fn config(&self) -> &OpenApiConfig {
        &self.config
    }

    pub fn paths(&self) -> &Map<String, Value> {
        &self.paths
    }

    /// Path Item Object for one URL template.
    pub fn path(&self, template: &str) -> Option<&Value> {
        self.paths.get(template)
    }

    pub fn schemas(&self) -> &SchemaRegistry {
        &self.schemas
    }

    pub fn schemas_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.schemas
    }

    /// Move this document behind a [`SpecHandle`] and install it as a route
    /// hook on `app`. Routes already registered on `app` are contributed
    /// immediately.
    pub fn attach(self, app: &mut App) -> Result<SpecHandle, DocsError> {
        let handle = SpecHandle::new(self);
        app.add_hook(handle.clone())?;
        Ok(handle)
    }

    /// Render the whole document.
    ///
    /// `components` is only present once at least one schema is registered.
    pub fn to_value(&self) -> Value {
        let mut info: Map<String, Value> = Map::new();
        info.insert("title".into(), json!(self.config.title));
        info.insert("version".into(), json!(self.config.version));
        if let Some(ref desc) = self.config.description {
            info.insert("description".into(), json!(desc));
        }

        let mut doc: Map<String, Value> = Map::new();
        doc.insert("openapi".into(), json!(self.config.openapi_version));
        doc.insert("info".into(), Value::Object(info));
        doc.insert("paths".into(), Value::Object(self.paths.clone()));

        if !self.schemas.is_empty() {
            doc.insert(
                "components".into(),
                json!({ "schemas": self.schemas.as_map() }),
            );
        }

        Value::Object(doc)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_value())
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.to_value())
    }
}

impl ResolveModel for ApiSpec {
    fn resolve(&mut self, model: ModelRef) -> Result<Reference, DocsError> {
        self.schemas.resolve(model)
    }
}

impl ContributePath for ApiSpec {
    fn contribute(
        &mut self,
        path: &str,
        methods: &[HttpMethod],
        docs: Option<&Docs>,
    ) -> Result<(), DocsError> {
        contribute_path(&mut self.paths, &mut self.schemas, path, methods, docs)
    }
}
