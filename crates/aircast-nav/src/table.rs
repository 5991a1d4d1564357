//! Declarative route records and the ordered route table.

use crate::error::RouteTableError;
use std::collections::HashSet;

/// Binding from a URL path pattern to an externally supplied view handle.
///
/// The table holds the view by value but never inspects it; rendering is the
/// host's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route<V> {
    /// Absolute URL path pattern, unique within a table.
    pub path: &'static str,
    /// Opaque handle to the page-rendering view.
    pub view: V,
    /// Optional symbolic identifier for programmatic navigation.
    pub name: Option<&'static str>,
}

impl<V> Route<V> {
    /// Declare an unnamed route.
    #[must_use]
    pub const fn new(path: &'static str, view: V) -> Self {
        Self {
            path,
            view,
            name: None,
        }
    }

    /// Declare a route addressable by a symbolic name.
    #[must_use]
    pub const fn named(path: &'static str, view: V, name: &'static str) -> Self {
        Self {
            path,
            view,
            name: Some(name),
        }
    }
}

/// Successful resolution of a requested path against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'table, V> {
    /// The winning route.
    pub route: &'table Route<V>,
    /// Captured parameter values in pattern order.
    pub params: Vec<(&'static str, String)>,
}

/// Ordered, immutable collection of routes compiled for matching.
///
/// Construction validates the whole table; afterwards the table is read-only
/// and resolution is synchronous and never panics. Order matters only for
/// precedence: a pattern with more literal segments beats one with fewer, and
/// ties go to the first-declared route.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
    patterns: Vec<Pattern>,
    fallback: Option<V>,
}

impl<V> RouteTable<V> {
    /// Compile and validate a table from declared routes.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError`] when a pattern is relative or has an empty
    /// parameter name, or when a path or symbolic name is declared twice.
    pub fn new(routes: Vec<Route<V>>) -> Result<Self, RouteTableError> {
        let mut patterns = Vec::with_capacity(routes.len());
        let mut paths = HashSet::new();
        let mut names = HashSet::new();
        for route in &routes {
            let pattern = Pattern::parse(route.path)?;
            if !paths.insert(route.path) {
                return Err(RouteTableError::DuplicatePath {
                    path: route.path.to_string(),
                });
            }
            if let Some(name) = route.name {
                if !names.insert(name) {
                    return Err(RouteTableError::DuplicateName {
                        name: name.to_string(),
                    });
                }
            }
            patterns.push(pattern);
        }
        Ok(Self {
            routes,
            patterns,
            fallback: None,
        })
    }

    /// Install a view to hand back when no route matches.
    ///
    /// The fallback is a host decision, not part of the declared table, and
    /// does not count towards [`RouteTable::len`].
    #[must_use]
    pub fn with_fallback(mut self, view: V) -> Self {
        self.fallback = Some(view);
        self
    }

    /// Resolve a requested path to at most one route.
    ///
    /// Query and fragment suffixes are ignored, as is a trailing slash on
    /// anything but the root path. An undeclared path yields `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_, V>> {
        let normalized = normalize(path);
        let segments = split_segments(normalized);
        let mut best: Option<(usize, usize, Vec<(&'static str, String)>)> = None;
        for (index, pattern) in self.patterns.iter().enumerate() {
            if let Some(params) = pattern.matches(&segments) {
                let score = pattern.specificity();
                if best
                    .as_ref()
                    .is_none_or(|(best_score, _, _)| score > *best_score)
                {
                    best = Some((score, index, params));
                }
            }
        }
        best.map(|(_, index, params)| RouteMatch {
            route: &self.routes[index],
            params,
        })
    }

    /// Look up a route by its symbolic name.
    #[must_use]
    pub fn resolve_name(&self, name: &str) -> Option<&Route<V>> {
        self.routes.iter().find(|route| route.name == Some(name))
    }

    /// Declared routes in table order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    /// View handed back for unmatched paths, when installed.
    #[must_use]
    pub const fn fallback(&self) -> Option<&V> {
        self.fallback.as_ref()
    }

    /// Number of declared routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the table declares no routes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// Compiled form of a path pattern, split into segments once at table
/// construction so resolution stays allocation-light.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    fn parse(raw: &'static str) -> Result<Self, RouteTableError> {
        if !raw.starts_with('/') {
            return Err(RouteTableError::RelativePattern {
                pattern: raw.to_string(),
            });
        }
        let mut segments = Vec::new();
        for part in raw.split('/').filter(|part| !part.is_empty()) {
            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteTableError::EmptyParameter {
                        pattern: raw.to_string(),
                    });
                }
                segments.push(Segment::Param(name));
            } else {
                segments.push(Segment::Literal(part));
            }
        }
        Ok(Self { segments })
    }

    /// Literal segment count, used to rank ambiguous matches.
    fn specificity(&self) -> usize {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Literal(_)))
            .count()
    }

    fn matches(&self, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
        if segments.len() != self.segments.len() {
            return None;
        }
        let mut params = Vec::new();
        for (expected, actual) in self.segments.iter().zip(segments) {
            match expected {
                Segment::Literal(literal) => {
                    if *literal != *actual {
                        return None;
                    }
                }
                Segment::Param(name) => params.push((*name, (*actual).to_string())),
            }
        }
        Some(params)
    }
}

/// Strip query/fragment suffixes and the trailing slash (root excepted).
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station_table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            Route::new("/", "home"),
            Route::new("/broadcasts", "broadcasts"),
            Route::new("/settings", "settings"),
            Route::named("/round", "round", "round"),
        ])
        .expect("table literal is valid")
    }

    #[test]
    fn declared_paths_resolve_to_their_views() {
        let table = station_table();
        for (path, view) in [
            ("/", "home"),
            ("/broadcasts", "broadcasts"),
            ("/settings", "settings"),
            ("/round", "round"),
        ] {
            let matched = table.resolve(path).expect("declared path resolves");
            assert_eq!(matched.route.view, view);
            assert!(matched.params.is_empty());
        }
    }

    #[test]
    fn name_and_path_reach_the_same_route() {
        let table = station_table();
        let by_name = table.resolve_name("round").expect("named route exists");
        let by_path = table.resolve("/round").expect("path resolves");
        assert_eq!(by_name, by_path.route);
        assert_eq!(by_name.view, "round");
    }

    #[test]
    fn table_shape_matches_declaration() {
        let table = station_table();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        let named = table
            .routes()
            .iter()
            .filter(|route| route.name.is_some())
            .count();
        assert_eq!(named, 1);
    }

    #[test]
    fn undeclared_paths_yield_no_match() {
        let table = station_table();
        assert!(table.resolve("/nonexistent").is_none());
        assert!(table.resolve("/round/extra").is_none());
        assert!(table.resolve_name("broadcasts").is_none());
        assert!(table.fallback().is_none());
    }

    #[test]
    fn fallback_is_separate_from_declared_routes() {
        let table = station_table().with_fallback("not-found");
        assert_eq!(table.fallback(), Some(&"not-found"));
        assert_eq!(table.len(), 4);
        assert!(table.resolve("/nonexistent").is_none());
    }

    #[test]
    fn normalisation_ignores_suffixes() {
        let table = station_table();
        for path in [
            "/broadcasts/",
            "/broadcasts?day=friday",
            "/broadcasts#schedule",
            "/broadcasts/?day=friday#schedule",
        ] {
            let matched = table.resolve(path).expect("suffix is ignored");
            assert_eq!(matched.route.view, "broadcasts");
        }
        assert!(table.resolve("/").is_some());
        assert!(table.resolve("").is_some());
    }

    #[test]
    fn parameters_are_captured_in_order() {
        let table = RouteTable::new(vec![Route::new("/shows/:slug/:episode", "episode")])
            .expect("table literal is valid");
        let matched = table
            .resolve("/shows/morning-drive/12")
            .expect("parameters match");
        assert_eq!(
            matched.params,
            vec![("slug", "morning-drive".to_string()), ("episode", "12".to_string())]
        );
    }

    #[test]
    fn literal_segments_outrank_parameters() {
        let table = RouteTable::new(vec![
            Route::new("/shows/:slug", "by-slug"),
            Route::new("/shows/today", "today"),
        ])
        .expect("table literal is valid");
        let matched = table.resolve("/shows/today").expect("path resolves");
        assert_eq!(matched.route.view, "today");
        let matched = table.resolve("/shows/archive").expect("path resolves");
        assert_eq!(matched.route.view, "by-slug");
    }

    #[test]
    fn first_declared_route_wins_ties() {
        let table = RouteTable::new(vec![
            Route::new("/live/:channel", "by-channel"),
            Route::new("/live/:slot", "by-slot"),
        ])
        .expect("table literal is valid");
        let matched = table.resolve("/live/one").expect("path resolves");
        assert_eq!(matched.route.view, "by-channel");
    }

    #[test]
    fn construction_rejects_malformed_tables() {
        let err = RouteTable::new(vec![Route::new("round", "round")])
            .expect_err("relative pattern is rejected");
        assert!(matches!(err, RouteTableError::RelativePattern { .. }));

        let err = RouteTable::new(vec![Route::new("/shows/:", "show")])
            .expect_err("empty parameter is rejected");
        assert!(matches!(err, RouteTableError::EmptyParameter { .. }));

        let err = RouteTable::new(vec![
            Route::new("/round", "round"),
            Route::new("/round", "again"),
        ])
        .expect_err("duplicate path is rejected");
        assert!(matches!(err, RouteTableError::DuplicatePath { .. }));

        let err = RouteTable::new(vec![
            Route::named("/round", "round", "round"),
            Route::named("/live", "live", "round"),
        ])
        .expect_err("duplicate name is rejected");
        assert!(matches!(err, RouteTableError::DuplicateName { .. }));
    }
}
