/// Error type shared by every routedoc crate.
///
/// Annotations that are merely incomplete never produce an error; they
/// degrade to "nothing documented". The variants here are failures that
/// would otherwise corrupt the generated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocsError {
    /// A method name outside the standard HTTP verb set.
    UnknownMethod(String),
    /// A model field whose type has no JSON Schema primitive equivalent.
    UnsupportedField {
        model: String,
        field: String,
        reason: String,
    },
    /// A model that cannot be described as an object schema at all.
    InvalidModel { model: String, reason: String },
    /// Two distinct model types claim the same component name.
    SchemaCollision {
        name: String,
        existing: String,
        incoming: String,
    },
    /// Configuration could not be loaded.
    Config(String),
}

impl DocsError {
    pub(crate) fn unsupported(
        model: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DocsError::UnsupportedField {
            model: model.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(model: impl Into<String>, reason: impl Into<String>) -> Self {
        DocsError::InvalidModel {
            model: model.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for DocsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocsError::UnknownMethod(name) => write!(f, "Unknown HTTP method: {name}"),
            DocsError::UnsupportedField {
                model,
                field,
                reason,
            } => write!(f, "Unsupported field '{field}' on model '{model}': {reason}"),
            DocsError::InvalidModel { model, reason } => {
                write!(f, "Invalid model '{model}': {reason}")
            }
            DocsError::SchemaCollision {
                name,
                existing,
                incoming,
            } => write!(
                f,
                "Schema name collision for '{name}': already registered by {existing}, requested by {incoming}"
            ),
            DocsError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for DocsError {}
