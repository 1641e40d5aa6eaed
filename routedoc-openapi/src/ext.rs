use crate::path::ContributePath;
use crate::spec::ApiSpec;
use routedoc_core::{DocsError, RouteHook, RouteInfo};
use serde_json::Value;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to an [`ApiSpec`] that documents routes as an [`App`]
/// registers them.
///
/// Every mutation goes through one mutex, so a route's contribution is
/// applied whole before the next one starts.
///
/// # Example
///
/// ```ignore
/// use routedoc_openapi::{ApiSpec, OpenApiConfig};
///
/// let mut app = App::new("pets");
/// let spec = ApiSpec::new(OpenApiConfig::new("Pets", "1.0.0")).attach(&mut app)?;
///
/// app.route(RouteInfo::new("/pets", [HttpMethod::Get]).with_docs(Docs::new().get(model::<Pet>())))?;
///
/// println!("{}", spec.to_value());
/// ```
///
/// [`App`]: routedoc_core::App
#[derive(Clone)]
pub struct SpecHandle {
    inner: Arc<Mutex<ApiSpec>>,
}

impl SpecHandle {
    pub fn new(spec: ApiSpec) -> Self {
        Self {
            inner: Arc::new(Mutex::new(spec)),
        }
    }

    /// Run `f` with exclusive access to the document.
    pub fn with<R>(&self, f: impl FnOnce(&mut ApiSpec) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn to_value(&self) -> Value {
        self.lock().to_value()
    }

    fn lock(&self) -> MutexGuard<'_, ApiSpec> {
        // Paths are only written after every operation for a route is built,
        // so a poisoned document is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RouteHook for SpecHandle {
    fn on_route(&mut self, route: &RouteInfo) -> Result<(), DocsError> {
        self.lock().contribute_route(route)
    }

    fn name(&self) -> &'static str {
        "openapi"
    }
}

impl std::fmt::Debug for SpecHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecHandle").finish_non_exhaustive()
    }
}
