use crate::operation::build_operation;
use crate::schema::ResolveModel;
use routedoc_core::{Docs, DocsError, HttpMethod, RouteInfo};
use serde_json::{json, Map, Value};

/// Merges a route's documentation into a paths table.
pub trait ContributePath {
    fn contribute(
        &mut self,
        path: &str,
        methods: &[HttpMethod],
        docs: Option<&Docs>,
    ) -> Result<(), DocsError>;

    fn contribute_route(&mut self, route: &RouteInfo) -> Result<(), DocsError> {
        self.contribute(&route.path, &route.methods, route.docs.as_ref())
    }
}

/// Build the Path Item contribution for one route and merge it into `paths`.
///
/// Every operation is built before `paths` is touched, so a resolution
/// failure leaves the paths table as it was. Routes without documentation,
/// or whose documentation yields nothing, add no entry.
pub fn contribute_path<R: ResolveModel + ?Sized>(
    paths: &mut Map<String, Value>,
    resolver: &mut R,
    path: &str,
    methods: &[HttpMethod],
    docs: Option<&Docs>,
) -> Result<(), DocsError> {
    let Some(docs) = docs else {
        tracing::trace!(path, "undocumented route");
        return Ok(());
    };

    for documented in docs.documented_methods() {
        if !methods.contains(&documented) {
            tracing::debug!(path, method = %documented, "documented method is not declared by the route; ignored");
        }
    }

    let mut contribution = Map::new();
    if let Some(summary) = docs.summary_text() {
        contribution.insert("summary".into(), json!(summary));
    }
    if let Some(description) = docs.description_text() {
        contribution.insert("description".into(), json!(description));
    }
    for method in methods {
        if let Some(operation) = build_operation(resolver, docs.annotation(*method))? {
            contribution.insert(method.key().into(), operation);
        }
    }

    if contribution.is_empty() {
        tracing::trace!(path, "route documentation is empty");
        return Ok(());
    }

    tracing::debug!(path, keys = ?contribution.keys().collect::<Vec<_>>(), "contributing path item");
    merge_path_item(paths, path, contribution);
    Ok(())
}

/// Merge `contribution` key by key into the Path Item stored under `path`.
///
/// Existing keys not present in `contribution` are kept; keys present in
/// both take the new value. Keys are then put in a fixed order (summary,
/// description, then methods in [`HttpMethod::ALL`] order) so the result
/// does not depend on the order contributions arrived in.
pub fn merge_path_item(paths: &mut Map<String, Value>, path: &str, contribution: Map<String, Value>) {
    let entry = paths
        .entry(path.to_string())
        .or_insert_with(|| Value::Object(Map::new()));

    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }

    if let Some(item) = entry.as_object_mut() {
        for (key, value) in contribution {
            item.insert(key, value);
        }
        let merged = std::mem::take(item);
        *item = ordered(merged);
    }
}

fn ordered(mut item: Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();
    let known = ["summary", "description"]
        .into_iter()
        .chain(HttpMethod::ALL.iter().map(HttpMethod::key));
    for key in known {
        if let Some(value) = item.remove(key) {
            out.insert(key.to_string(), value);
        }
    }
    out.extend(item);
    out
}
