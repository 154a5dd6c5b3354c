//! Route parameters extracted from a concrete path

use serde::Serialize;
use std::collections::BTreeMap;

/// Parameter name → value, derived fresh on every successful match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    /// Empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// The `symbol` parameter of the symbol detail route
    pub fn symbol(&self) -> Option<&str> {
        self.get("symbol")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_accessor() {
        let params = RouteParams::new().with("symbol", "AAPL");
        assert_eq!(params.symbol(), Some("AAPL"));
        assert_eq!(params.get("other"), None);
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_serializes_as_map() {
        let params = RouteParams::new().with("symbol", "MSFT");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"symbol":"MSFT"}"#);
    }
}
