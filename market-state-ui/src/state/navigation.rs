//! Navigation State
//!
//! Wires the `market_state` navigator into Leptos. The navigator is the only
//! writer of the location; its render callback publishes each resolution to
//! signals that the outlet and links read.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use market_state::navigation::{History, MemoryHistory, NavigationResult, Navigator, Resolution};
use market_state::routing::RouteTable;

use super::history::BrowserHistory;

type SharedNavigator = Rc<RefCell<Navigator<Box<dyn History>>>>;

/// Navigation state provided to all components
#[derive(Clone)]
pub struct NavigationState {
    /// What the outlet currently shows
    pub resolution: RwSignal<Resolution>,
    /// Current concrete location
    pub location: RwSignal<String>,
    navigator: SharedNavigator,
}

/// Create the navigator, render the entry URL and provide the state
pub fn provide_navigation() -> NavigationState {
    let history: Box<dyn History> = match BrowserHistory::new() {
        Ok(history) => Box::new(history),
        Err(e) => {
            logging::warn!("browser history unavailable, navigation stays in memory: {}", e);
            Box::new(MemoryHistory::default())
        }
    };

    let resolution = create_rw_signal(Resolution::NotFound {
        path: String::new(),
    });
    let location = create_rw_signal(String::new());

    let navigator = Navigator::new(RouteTable::standard(), history, move |r: &Resolution| {
        document().set_title(r.title());
        location.set(r.path().to_string());
        resolution.set(r.clone());
    });

    let state = NavigationState {
        resolution,
        location,
        navigator: Rc::new(RefCell::new(navigator)),
    };

    // Back/forward in the browser arrive here
    let state_for_pop = state.clone();
    let listener = window_event_listener(ev::popstate, move |_| {
        state_for_pop.sync_with_history();
    });
    on_cleanup(move || listener.remove());

    provide_context(state.clone());
    state
}

/// Navigation state from context
pub fn use_navigation() -> NavigationState {
    use_context::<NavigationState>().expect("NavigationState not provided")
}

impl NavigationState {
    /// Navigate to `path`, adding a history entry
    pub fn navigate(&self, path: &str) {
        self.with_navigator(path, |navigator| navigator.navigate(path).map(|_| ()));
    }

    /// Step back; the browser reports the new entry via `popstate`
    pub fn back(&self) {
        self.with_navigator("<back>", |navigator| navigator.back().map(|_| ()));
    }

    /// Whether `href` is the current location
    pub fn is_current(&self, href: &str) -> bool {
        self.location.with(|location| location == href)
    }

    fn sync_with_history(&self) {
        self.with_navigator("<popstate>", |navigator| {
            let path = navigator.history().current_path();
            navigator.pop_to(&path);
            Ok(())
        });
    }

    fn with_navigator(
        &self,
        target: &str,
        op: impl FnOnce(&mut Navigator<Box<dyn History>>) -> NavigationResult<()>,
    ) {
        match self.navigator.try_borrow_mut() {
            Ok(mut navigator) => {
                if let Err(e) = op(&mut *navigator) {
                    logging::warn!("navigation to {} failed: {}", target, e);
                }
            }
            Err(_) => {
                logging::warn!("navigation to {} ignored: a render is in progress", target);
            }
        }
    }
}
