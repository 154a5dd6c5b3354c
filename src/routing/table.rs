//! Route table and resolution
//!
//! The table is an ordered list of `(pattern, view)` bindings built once at
//! start-up. Resolution walks it in declaration order and returns the first
//! route whose pattern matches, so order only matters when two patterns can
//! match the same path.

use serde::Serialize;
use std::collections::HashSet;

use super::error::{RouteError, RouteResult};
use super::params::RouteParams;
use super::pattern::PathPattern;
use super::view::View;

/// A binding between a path pattern and a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pattern: PathPattern,
    view: View,
}

impl Route {
    /// Create a route from a pattern string
    pub fn new(pattern: &str, view: View) -> RouteResult<Self> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            view,
        })
    }

    fn trusted(pattern: &'static str, view: View) -> Self {
        Self {
            pattern: PathPattern::trusted(pattern),
            view,
        }
    }

    pub fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }
}

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMatch {
    /// The concrete path that was resolved
    pub path: String,
    /// The matched view
    pub view: View,
    /// Parameters bound from the path
    pub params: RouteParams,
    /// Pattern of the matched route
    pub pattern: String,
    /// Position of the matched route in the table
    pub index: usize,
}

/// Summary of a route for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub pattern: String,
    pub view: View,
    pub param: Option<String>,
}

/// Ordered, immutable collection of routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table, rejecting identical pattern strings
    ///
    /// Distinct patterns that happen to overlap are allowed; the route
    /// declared first wins for paths both can match.
    pub fn new(routes: Vec<Route>) -> RouteResult<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.pattern.as_str()) {
                return Err(RouteError::DuplicatePattern(
                    route.pattern.as_str().to_string(),
                ));
            }
        }
        Ok(Self { routes })
    }

    /// The application's route table
    ///
    /// | pattern           | view          |
    /// |-------------------|---------------|
    /// | `/`               | Landing       |
    /// | `/login`          | Login         |
    /// | `/register`       | Register      |
    /// | `/dashboard`      | Dashboard     |
    /// | `/symbol/:symbol` | SymbolDetail  |
    /// | `/journal`        | TradeJournal  |
    /// | `/analysis`       | Analysis      |
    /// | `/settings`       | Settings      |
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route::trusted("/", View::Landing),
                Route::trusted("/login", View::Login),
                Route::trusted("/register", View::Register),
                Route::trusted("/dashboard", View::Dashboard),
                Route::trusted("/symbol/:symbol", View::SymbolDetail),
                Route::trusted("/journal", View::TradeJournal),
                Route::trusted("/analysis", View::Analysis),
                Route::trusted("/settings", View::Settings),
            ],
        }
    }

    /// Resolve a concrete path to the first matching route
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.routes.iter().enumerate().find_map(|(index, route)| {
            route.pattern.matches(path).map(|params| RouteMatch {
                path: path.to_string(),
                view: route.view,
                params,
                pattern: route.pattern.as_str().to_string(),
                index,
            })
        })
    }

    /// Build the concrete path for a view
    ///
    /// Uses the first route bound to `view`. Returns `None` if the view is
    /// not routed or a required parameter is missing.
    pub fn href(&self, view: View, params: &RouteParams) -> Option<String> {
        self.routes
            .iter()
            .find(|route| route.view == view)
            .and_then(|route| route.pattern.build(params))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Listing of every route, in declaration order
    pub fn describe(&self) -> Vec<RouteInfo> {
        self.routes
            .iter()
            .map(|route| RouteInfo {
                pattern: route.pattern.as_str().to_string(),
                view: route.view,
                param: route.pattern.param_name().map(str::to_string),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LITERAL_ROUTES: [(&str, View); 7] = [
        ("/", View::Landing),
        ("/login", View::Login),
        ("/register", View::Register),
        ("/dashboard", View::Dashboard),
        ("/journal", View::TradeJournal),
        ("/analysis", View::Analysis),
        ("/settings", View::Settings),
    ];

    #[test]
    fn test_standard_table_validates() {
        let standard = RouteTable::standard();
        let rebuilt = RouteTable::new(
            standard
                .routes()
                .iter()
                .map(|r| Route::new(r.pattern().as_str(), r.view()).unwrap())
                .collect(),
        )
        .unwrap();
        assert_eq!(rebuilt, standard);
        assert_eq!(standard.len(), 8);
    }

    #[test]
    fn test_every_view_is_routed_once() {
        let table = RouteTable::standard();
        for view in View::ALL {
            let count = table.routes().iter().filter(|r| r.view() == view).count();
            assert_eq!(count, 1, "{view} should be bound exactly once");
        }
    }

    #[test]
    fn test_literal_routes_resolve_with_empty_params() {
        let table = RouteTable::standard();
        for (path, view) in LITERAL_ROUTES {
            let matched = table.resolve(path).unwrap();
            assert_eq!(matched.view, view, "path {path}");
            assert!(matched.params.is_empty(), "path {path}");
            assert_eq!(matched.pattern, path);
        }
    }

    #[test]
    fn test_symbol_route() {
        let table = RouteTable::standard();

        let matched = table.resolve("/symbol/AAPL").unwrap();
        assert_eq!(matched.view, View::SymbolDetail);
        assert_eq!(matched.params.symbol(), Some("AAPL"));
        assert_eq!(matched.pattern, "/symbol/:symbol");
        assert_eq!(matched.index, 4);

        assert_eq!(table.resolve("/symbol/"), None);
        assert_eq!(table.resolve("/symbol"), None);
    }

    #[test]
    fn test_unknown_paths_do_not_match() {
        let table = RouteTable::standard();
        for path in [
            "/nonexistent",
            "/login/extra",
            "/dashboard/",
            "/symbol/AAPL/news",
            "/Settings",
            "settings",
            "",
        ] {
            assert_eq!(table.resolve(path), None, "path {path:?}");
        }
    }

    #[test]
    fn test_duplicate_patterns_rejected() {
        let err = RouteTable::new(vec![
            Route::new("/login", View::Login).unwrap(),
            Route::new("/login", View::Register).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, RouteError::DuplicatePattern("/login".to_string()));
    }

    #[test]
    fn test_first_declared_wins_on_overlap() {
        let table = RouteTable::new(vec![
            Route::new("/symbol/:symbol", View::SymbolDetail).unwrap(),
            Route::new("/symbol/watchlist", View::Dashboard).unwrap(),
        ])
        .unwrap();
        let matched = table.resolve("/symbol/watchlist").unwrap();
        assert_eq!(matched.view, View::SymbolDetail);
        assert_eq!(matched.params.symbol(), Some("watchlist"));

        let reversed = RouteTable::new(vec![
            Route::new("/symbol/watchlist", View::Dashboard).unwrap(),
            Route::new("/symbol/:symbol", View::SymbolDetail).unwrap(),
        ])
        .unwrap();
        let matched = reversed.resolve("/symbol/watchlist").unwrap();
        assert_eq!(matched.view, View::Dashboard);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_literal_order_is_irrelevant() {
        let mut routes: Vec<Route> = RouteTable::standard().routes().to_vec();
        routes.reverse();
        let reversed = RouteTable::new(routes).unwrap();
        for (path, view) in LITERAL_ROUTES {
            assert_eq!(reversed.resolve(path).unwrap().view, view);
        }
    }

    #[test]
    fn test_href() {
        let table = RouteTable::standard();
        assert_eq!(
            table.href(View::TradeJournal, &RouteParams::new()).as_deref(),
            Some("/journal")
        );
        assert_eq!(
            table
                .href(View::SymbolDetail, &RouteParams::new().with("symbol", "NVDA"))
                .as_deref(),
            Some("/symbol/NVDA")
        );
        assert_eq!(table.href(View::SymbolDetail, &RouteParams::new()), None);

        let partial = RouteTable::new(vec![Route::new("/", View::Landing).unwrap()]).unwrap();
        assert_eq!(partial.href(View::Settings, &RouteParams::new()), None);
    }
}
