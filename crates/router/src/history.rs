//! History-mode base path handling

/// Routing strategy backed by the browser's native history API, rooted at
/// a base path. The base is always normalised to a leading `/` and no
/// trailing `/`, except for the root itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebHistory {
    base: String,
}

impl WebHistory {
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_matches('/');
        let base = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}")
        };
        Self { base }
    }

    /// History rooted at the `BASE_URL` the bundle was built with
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("BASE_URL").unwrap_or("/"))
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Location relative to the base, always starting with `/`.
    ///
    /// Returns `None` for locations outside the base, e.g. `/other` under
    /// a base of `/app`. Query and fragment are dropped.
    #[must_use]
    pub fn strip_base<'a>(&self, location: &'a str) -> Option<&'a str> {
        let path = location
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        if self.base == "/" {
            return Some(if path.is_empty() { "/" } else { path });
        }

        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            // `/application` is not under `/app`
            None
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_normalisation() {
        assert_eq!(WebHistory::new("").base(), "/");
        assert_eq!(WebHistory::new("/").base(), "/");
        assert_eq!(WebHistory::new("app/").base(), "/app");
        assert_eq!(WebHistory::new("/nested/app/").base(), "/nested/app");
    }

    #[test]
    fn test_strip_root_base() {
        let history = WebHistory::default();
        assert_eq!(history.strip_base("/users/1?tab=a"), Some("/users/1"));
        assert_eq!(history.strip_base(""), Some("/"));
    }

    #[test]
    fn test_strip_nested_base() {
        let history = WebHistory::new("/app/");
        assert_eq!(history.strip_base("/app"), Some("/"));
        assert_eq!(history.strip_base("/app/users#top"), Some("/users"));
        assert_eq!(history.strip_base("/application"), None);
        assert_eq!(history.strip_base("/other"), None);
    }
}
