//! Browser History
//!
//! `History` backend on top of `window.history`. Back and forward are
//! asynchronous in the browser: the new entry arrives as a `popstate` event.

use market_state::navigation::{History, HistoryStep, NavigationError, NavigationResult};
use wasm_bindgen::JsValue;

/// Session history of the hosting document
pub struct BrowserHistory {
    history: web_sys::History,
    location: web_sys::Location,
}

impl BrowserHistory {
    pub fn new() -> NavigationResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| NavigationError::History("no window available".to_string()))?;
        let history = window.history().map_err(js_error)?;

        Ok(Self {
            history,
            location: window.location(),
        })
    }
}

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        let pathname = self.location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = self.location.search().unwrap_or_default();
        format!("{}{}", pathname, search)
    }

    fn push(&mut self, path: &str) -> NavigationResult<()> {
        self.history
            .push_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(js_error)
    }

    fn replace(&mut self, path: &str) -> NavigationResult<()> {
        self.history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(js_error)
    }

    fn back(&mut self) -> NavigationResult<HistoryStep> {
        self.history.back().map_err(js_error)?;
        Ok(HistoryStep::Pending)
    }

    fn forward(&mut self) -> NavigationResult<HistoryStep> {
        self.history.forward().map_err(js_error)?;
        Ok(HistoryStep::Pending)
    }
}

fn js_error(value: JsValue) -> NavigationError {
    NavigationError::History(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_push_updates_location() {
        let mut history = BrowserHistory::new().unwrap();
        history.push("/symbol/AAPL").unwrap();
        assert_eq!(history.current_path(), "/symbol/AAPL");

        history.replace("/dashboard?tab=watchlist").unwrap();
        assert_eq!(history.current_path(), "/dashboard?tab=watchlist");
    }

    #[wasm_bindgen_test]
    fn test_back_is_deferred() {
        let mut history = BrowserHistory::new().unwrap();
        history.push("/journal").unwrap();
        assert_eq!(history.back().unwrap(), HistoryStep::Pending);
    }
}
