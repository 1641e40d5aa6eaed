use routedoc_core::DocsError;
use serde::Deserialize;

pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.1";

/// Configuration for the generated OpenAPI specification.
///
/// Can be built in code or read from a YAML section:
///
/// ```yaml
/// title: Pet Store
/// version: 1.0.0
/// description: Everything about pets
/// openapi_version: 3.0.3
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_openapi_version")]
    pub openapi_version: String,
}

fn default_openapi_version() -> String {
    DEFAULT_OPENAPI_VERSION.to_string()
}

impl OpenApiConfig {
    pub fn new(title: &str, version: &str) -> Self {
        Self {
            title: title.to_string(),
            version: version.to_string(),
            description: None,
            openapi_version: default_openapi_version(),
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    pub fn with_openapi_version(mut self, version: &str) -> Self {
        self.openapi_version = version.to_string();
        self
    }

    /// Parse a config from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DocsError> {
        serde_yaml::from_str(yaml).map_err(|e| DocsError::Config(e.to_string()))
    }
}
