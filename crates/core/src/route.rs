//! Route parsing: `#module/param/param` → module key and ordered parameters.

pub const FRAGMENT_MARKER: char = '#';
const SEGMENT_SEPARATOR: char = '/';

/// Module key and parameters derived from a route string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub module: String,
    pub params: Vec<String>,
}

impl Route {
    pub fn new(module: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            module: module.into(),
            params,
        }
    }

    /// Canonical fragment, e.g. `#users/123/edit`.
    pub fn to_fragment(&self) -> String {
        let mut fragment = String::with_capacity(1 + self.module.len());
        fragment.push(FRAGMENT_MARKER);
        fragment.push_str(&self.module);
        for param in &self.params {
            fragment.push(SEGMENT_SEPARATOR);
            fragment.push_str(param);
        }
        fragment
    }
}

/// Parses `route` into a module key and parameters.
///
/// Both `#users/1` and `#/users/1` name the module `users`. The leading `#`
/// is optional. Every segment after the key is kept in order, including
/// empty ones, so `#users/1/` yields `["1", ""]`. A route without a module
/// segment resolves to `default_module`.
pub fn parse_route(route: &str, default_module: &str) -> Route {
    let path = route.strip_prefix(FRAGMENT_MARKER).unwrap_or(route);
    let path = path.strip_prefix(SEGMENT_SEPARATOR).unwrap_or(path);

    if path.is_empty() {
        return Route::new(default_module, Vec::new());
    }

    let mut segments = path.split(SEGMENT_SEPARATOR);
    let module = match segments.next() {
        Some(key) if !key.is_empty() => key,
        _ => default_module,
    };
    let params = segments.map(str::to_string).collect();

    Route::new(module, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_route_table() {
        let cases: &[(&str, &str, &[&str])] = &[
            ("#users", "users", &[]),
            ("#users/123", "users", &["123"]),
            ("#users/123/edit", "users", &["123", "edit"]),
            ("", "home", &[]),
            ("#", "home", &[]),
            ("#/users", "users", &[]),
            ("#/", "home", &[]),
            ("users/7", "users", &["7"]),
        ];

        for (input, module, expected) in cases {
            let route = parse_route(input, "home");
            assert_eq!(route.module, *module, "module of {:?}", input);
            assert_eq!(route.params, params(expected), "params of {:?}", input);
        }
    }

    #[test]
    fn test_leading_slash_normalizes() {
        assert_eq!(
            parse_route("#/users/9", "home"),
            parse_route("#users/9", "home")
        );
    }

    #[test]
    fn test_empty_segments_are_preserved() {
        let route = parse_route("#users/1/", "home");
        assert_eq!(route.params, params(&["1", ""]));

        let route = parse_route("#users//edit", "home");
        assert_eq!(route.params, params(&["", "edit"]));
    }

    #[test]
    fn test_only_one_leading_slash_is_stripped() {
        let route = parse_route("#//users", "home");
        assert_eq!(route.module, "home");
        assert_eq!(route.params, params(&["users"]));
    }

    #[test]
    fn test_default_module_is_configurable() {
        let route = parse_route("", "dashboard");
        assert_eq!(route.module, "dashboard");
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_to_fragment() {
        let route = parse_route("#/users/123/", "home");
        assert_eq!(route.to_fragment(), "#users/123/");
        assert_eq!(Route::new("home", Vec::new()).to_fragment(), "#home");
    }
}
