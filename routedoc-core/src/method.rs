use crate::error::DocsError;
use std::str::FromStr;

/// An HTTP method a route can declare.
///
/// Parsing is case-insensitive, so `"get"`, `"GET"` and `"Get"` are the
/// same method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// Upper-case wire name (`"GET"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Lower-case key used for operations inside an OpenAPI Path Item (`"get"`).
    pub fn key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Parse a list of method names, dropping repeats while keeping the
    /// first-seen order.
    pub fn parse_list<I, S>(names: I) -> Result<Vec<HttpMethod>, DocsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut methods = Vec::new();
        for name in names {
            let method: HttpMethod = name.as_ref().parse()?;
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        Ok(methods)
    }
}

impl FromStr for HttpMethod {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HttpMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DocsError::UnknownMethod(s.to_string()))
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Delete".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn parse_unknown_method() {
        let err = "FETCH".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, DocsError::UnknownMethod("FETCH".into()));
    }

    #[test]
    fn parse_list_dedupes_in_order() {
        let methods = HttpMethod::parse_list(["post", "GET", "Post"]).unwrap();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
    }

    #[test]
    fn key_is_lowercase() {
        for method in HttpMethod::ALL {
            assert_eq!(method.key(), method.as_str().to_ascii_lowercase());
        }
    }
}
