//! Routing Core
//!
//! Maps URL paths to top-level views.
//!
//! # Path grammar
//!
//! - `/` - Landing
//! - `/login` - Login
//! - `/register` - Register
//! - `/dashboard` - Dashboard
//! - `/symbol/:symbol` - SymbolDetail
//! - `/journal` - TradeJournal
//! - `/analysis` - Analysis
//! - `/settings` - Settings
//!
//! # Example
//!
//! ```rust
//! use market_state::routing::{RouteTable, View};
//!
//! let table = RouteTable::standard();
//! let matched = table.resolve("/symbol/AAPL").unwrap();
//! assert_eq!(matched.view, View::SymbolDetail);
//! assert_eq!(matched.params.symbol(), Some("AAPL"));
//!
//! assert!(table.resolve("/nonexistent").is_none());
//! ```

pub mod error;
pub mod params;
pub mod pattern;
pub mod table;
pub mod view;

pub use error::{RouteError, RouteResult};
pub use params::RouteParams;
pub use pattern::PathPattern;
pub use table::{Route, RouteInfo, RouteMatch, RouteTable};
pub use view::View;

/// Concrete paths for the standard routes
pub mod paths {
    pub const LANDING: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const DASHBOARD: &str = "/dashboard";
    pub const JOURNAL: &str = "/journal";
    pub const ANALYSIS: &str = "/analysis";
    pub const SETTINGS: &str = "/settings";

    /// Path of the detail page for `ticker`, percent-encoded
    pub fn symbol(ticker: &str) -> String {
        format!("/symbol/{}", urlencoding::encode(ticker))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::routing::{RouteTable, View};

        #[test]
        fn test_paths_resolve() {
            let table = RouteTable::standard();
            assert_eq!(table.resolve(JOURNAL).unwrap().view, View::TradeJournal);
            assert_eq!(table.resolve(ANALYSIS).unwrap().view, View::Analysis);

            let matched = table.resolve(&symbol("BRK.B")).unwrap();
            assert_eq!(matched.params.symbol(), Some("BRK.B"));

            let matched = table.resolve(&symbol("A/B")).unwrap();
            assert_eq!(matched.params.symbol(), Some("A/B"));
        }
    }
}
