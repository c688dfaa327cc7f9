use crate::error::RouteError;
use crate::history::WebHistory;
use std::collections::HashMap;

/// A path pattern and the view it renders.
///
/// Patterns are `/`-separated; a segment written `:name` matches any
/// single segment and captures it under `name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDefinition<V> {
    pub path: String,
    pub name: Option<String>,
    pub view: V,
}

impl<V> RouteDefinition<V> {
    #[must_use]
    pub fn new(path: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: None,
            view,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let mut pattern = segments(&self.path);
        let mut actual = segments(path);
        let mut params = HashMap::new();

        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return Some(params),
                (Some(p), Some(a)) => {
                    if let Some(name) = p.strip_prefix(':') {
                        // A segment that is not valid UTF-8 once decoded matches nothing
                        let value = urlencoding::decode(a).ok()?;
                        params.insert(name.to_string(), value.into_owned());
                    } else if p != a {
                        return None;
                    }
                }
                _ => return None,
            }
        }
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Canonical form of a pattern; equal keys match the same locations
fn match_key(path: &str) -> Vec<&str> {
    segments(path)
        .map(|s| if s.starts_with(':') { ":" } else { s })
        .collect()
}

/// Successful resolution of a location
#[derive(Debug, PartialEq, Eq)]
pub struct RouteMatch<'a, V> {
    pub route: &'a RouteDefinition<V>,
    pub params: HashMap<String, String>,
}

impl<V> RouteMatch<'_, V> {
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Ordered route definitions under a history base.
///
/// An empty table is valid: every location resolves to no match.
#[derive(Debug, Clone)]
pub struct RouteTable<V> {
    history: WebHistory,
    routes: Vec<RouteDefinition<V>>,
}

impl<V> RouteTable<V> {
    /// Build a table, rejecting malformed or duplicate paths
    pub fn new(
        history: WebHistory,
        routes: impl IntoIterator<Item = RouteDefinition<V>>,
    ) -> Result<Self, RouteError> {
        let mut table = Self {
            history,
            routes: Vec::new(),
        };
        for route in routes {
            table.add(route)?;
        }
        Ok(table)
    }

    /// Append a route after the existing ones
    pub fn add(&mut self, route: RouteDefinition<V>) -> Result<(), RouteError> {
        if !route.path.starts_with('/') {
            return Err(RouteError::InvalidPath(route.path));
        }
        let key = match_key(&route.path);
        if self.routes.iter().any(|r| match_key(&r.path) == key) {
            return Err(RouteError::DuplicatePath(route.path));
        }
        tracing::debug!(path = %route.path, "Registered route");
        self.routes.push(route);
        Ok(())
    }

    /// First route, in registration order, matching `location`
    #[must_use]
    pub fn resolve(&self, location: &str) -> Option<RouteMatch<'_, V>> {
        let path = self.history.strip_base(location)?;
        self.routes.iter().find_map(|route| {
            route
                .matches(path)
                .map(|params| RouteMatch { route, params })
        })
    }

    /// Look a route up by name
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteDefinition<V>> {
        self.routes
            .iter()
            .find(|r| r.name.as_deref() == Some(name))
    }

    #[must_use]
    pub const fn history(&self) -> &WebHistory {
        &self.history
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDefinition<V>] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self {
            history: WebHistory::default(),
            routes: Vec::new(),
        }
    }
}
