use crate::annotation::Docs;
use crate::error::DocsError;
use crate::method::HttpMethod;

/// One route registration as seen by documentation hooks.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    pub path: String,
    /// Declared methods, first-seen order, no repeats.
    pub methods: Vec<HttpMethod>,
    pub docs: Option<Docs>,
}

impl RouteInfo {
    pub fn new(path: impl Into<String>, methods: impl IntoIterator<Item = HttpMethod>) -> Self {
        let mut declared = Vec::new();
        for method in methods {
            if !declared.contains(&method) {
                declared.push(method);
            }
        }
        Self {
            path: path.into(),
            methods: declared,
            docs: None,
        }
    }

    /// Build from method names such as `["GET", "post"]`.
    pub fn parse<I, S>(path: impl Into<String>, methods: I) -> Result<Self, DocsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::new(path, HttpMethod::parse_list(methods)?))
    }

    pub fn with_docs(mut self, docs: Docs) -> Self {
        self.docs = Some(docs);
        self
    }
}

/// Callback run for every route accepted by an [`App`].
///
/// An error aborts the registration and is handed back to the caller of
/// [`App::route`], so a broken document fails at startup.
pub trait RouteHook: Send + 'static {
    fn on_route(&mut self, route: &RouteInfo) -> Result<(), DocsError>;

    /// The name of this hook (for diagnostics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> RouteHook for F
where
    F: FnMut(&RouteInfo) -> Result<(), DocsError> + Send + 'static,
{
    fn on_route(&mut self, route: &RouteInfo) -> Result<(), DocsError> {
        self(route)
    }
}

/// Minimal host route table.
///
/// Records route registrations and forwards each one to the installed
/// hooks, in installation order.
pub struct App {
    name: String,
    routes: Vec<RouteInfo>,
    hooks: Vec<Box<dyn RouteHook>>,
}

impl App {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
            hooks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Install a hook. Routes registered before the hook was installed are
    /// replayed into it so it sees the whole table.
    pub fn add_hook<H: RouteHook>(&mut self, mut hook: H) -> Result<(), DocsError> {
        for route in &self.routes {
            hook.on_route(route)?;
        }
        tracing::debug!(app = %self.name, hook = hook.name(), replayed = self.routes.len(), "route hook installed");
        self.hooks.push(Box::new(hook));
        Ok(())
    }

    /// Register a route. The route is recorded only once every hook accepted it.
    pub fn route(&mut self, route: RouteInfo) -> Result<(), DocsError> {
        for hook in &mut self.hooks {
            hook.on_route(&route).inspect_err(|err| {
                tracing::error!(path = %route.path, hook = hook.name(), error = %err, "route hook failed");
            })?;
        }
        tracing::debug!(
            app = %self.name,
            path = %route.path,
            methods = ?route.methods,
            documented = route.docs.is_some(),
            "route registered"
        );
        self.routes.push(route);
        Ok(())
    }

    pub fn routes(&self) -> &[RouteInfo] {
        &self.routes
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("name", &self.name)
            .field("routes", &self.routes.len())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
