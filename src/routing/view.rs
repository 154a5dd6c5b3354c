//! View references
//!
//! The routing core never renders anything itself. Each route points at a
//! [`View`], and the client maps that reference to a component.

use serde::Serialize;
use std::fmt;

/// Reference to one of the top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Landing,
    Login,
    Register,
    Dashboard,
    /// Per-symbol detail page, the only view that takes a route parameter
    SymbolDetail,
    TradeJournal,
    Analysis,
    Settings,
}

impl View {
    /// Every routable view, in route table order
    pub const ALL: [View; 8] = [
        View::Landing,
        View::Login,
        View::Register,
        View::Dashboard,
        View::SymbolDetail,
        View::TradeJournal,
        View::Analysis,
        View::Settings,
    ];

    /// Stable identifier used in logs and JSON output
    pub fn name(&self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Login => "login",
            View::Register => "register",
            View::Dashboard => "dashboard",
            View::SymbolDetail => "symbol_detail",
            View::TradeJournal => "trade_journal",
            View::Analysis => "analysis",
            View::Settings => "settings",
        }
    }

    /// Document title shown while the view is mounted
    pub fn title(&self) -> &'static str {
        match self {
            View::Landing => "Market State Analysis",
            View::Login => "Log in | Market State Analysis",
            View::Register => "Sign up | Market State Analysis",
            View::Dashboard => "Dashboard | Market State Analysis",
            View::SymbolDetail => "Symbol | Market State Analysis",
            View::TradeJournal => "Trade Journal | Market State Analysis",
            View::Analysis => "Analysis Log | Market State Analysis",
            View::Settings => "Settings | Market State Analysis",
        }
    }

    /// Name of the route parameter this view consumes, if any
    pub fn required_param(&self) -> Option<&'static str> {
        match self {
            View::SymbolDetail => Some("symbol"),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = View::ALL.iter().map(View::name).collect();
        assert_eq!(names.len(), View::ALL.len());
    }

    #[test]
    fn test_only_symbol_detail_takes_a_param() {
        for view in View::ALL {
            match view {
                View::SymbolDetail => assert_eq!(view.required_param(), Some("symbol")),
                other => assert_eq!(other.required_param(), None),
            }
        }
    }

    #[test]
    fn test_serializes_as_name() {
        let json = serde_json::to_string(&View::TradeJournal).unwrap();
        assert_eq!(json, "\"trade_journal\"");
        assert_eq!(View::SymbolDetail.to_string(), "symbol_detail");
    }
}
