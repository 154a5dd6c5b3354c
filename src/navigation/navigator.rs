//! Navigator
//!
//! Owns the current location and is its only writer. Every navigation runs
//! the same three steps in order:
//!
//! 1. update the location
//! 2. resolve it against the route table
//! 3. hand the result to the render callback
//!
//! All methods take `&mut self`, so one resolution and its render always
//! complete before the next navigation starts.

use serde::Serialize;

use super::error::{NavigationError, NavigationResult};
use super::history::{History, HistoryStep};
use crate::routing::{RouteMatch, RouteParams, RouteTable, View};

/// Title used while the not-found view is shown
pub const NOT_FOUND_TITLE: &str = "Page Not Found | Market State Analysis";

/// What the shell should display for a location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Resolution {
    /// A route matched
    Matched(RouteMatch),
    /// No route matched; the not-found view is shown
    NotFound { path: String },
}

impl Resolution {
    /// Resolve `path` against `table`, mapping a miss to `NotFound`
    pub fn resolve(table: &RouteTable, path: &str) -> Self {
        match table.resolve(path) {
            Some(matched) => Resolution::Matched(matched),
            None => Resolution::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn view(&self) -> Option<View> {
        match self {
            Resolution::Matched(m) => Some(m.view),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match self {
            Resolution::Matched(m) => Some(&m.params),
            Resolution::NotFound { .. } => None,
        }
    }

    /// The concrete path this resolution was computed for
    pub fn path(&self) -> &str {
        match self {
            Resolution::Matched(m) => &m.path,
            Resolution::NotFound { path } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound { .. })
    }

    /// Document title for the resolved view
    pub fn title(&self) -> &'static str {
        match self {
            Resolution::Matched(m) => m.view.title(),
            Resolution::NotFound { .. } => NOT_FOUND_TITLE,
        }
    }
}

/// Callback invoked once per committed navigation
pub type RenderFn = Box<dyn FnMut(&Resolution)>;

/// Single-page navigator over a history backend
pub struct Navigator<H: History> {
    table: RouteTable,
    history: H,
    location: String,
    current: Resolution,
    render: RenderFn,
    renders: u64,
}

impl<H: History> Navigator<H> {
    /// Create a navigator and render the history's current entry
    pub fn new(table: RouteTable, history: H, render: impl FnMut(&Resolution) + 'static) -> Self {
        let location = history.current_path();
        let current = Resolution::resolve(&table, &location);

        let mut navigator = Self {
            table,
            history,
            location,
            current,
            render: Box::new(render),
            renders: 0,
        };
        navigator.commit();
        navigator
    }

    /// Navigate to `path`, adding a history entry
    ///
    /// Navigating to the current location does nothing.
    pub fn navigate(&mut self, path: &str) -> NavigationResult<&Resolution> {
        validate_target(path)?;

        if path == self.location {
            tracing::debug!(path, "already at location");
            return Ok(&self.current);
        }

        self.history.push(path)?;
        Ok(self.apply(path))
    }

    /// Navigate to `path`, overwriting the current history entry
    pub fn replace(&mut self, path: &str) -> NavigationResult<&Resolution> {
        validate_target(path)?;

        if path == self.location {
            return Ok(&self.current);
        }

        self.history.replace(path)?;
        Ok(self.apply(path))
    }

    /// Step back in history
    ///
    /// Returns the new resolution when the history moved synchronously,
    /// `None` at the first entry or when the move arrives later via
    /// [`Navigator::pop_to`].
    pub fn back(&mut self) -> NavigationResult<Option<&Resolution>> {
        let step = self.history.back()?;
        Ok(self.step(step))
    }

    /// Step forward in history
    pub fn forward(&mut self) -> NavigationResult<Option<&Resolution>> {
        let step = self.history.forward()?;
        Ok(self.step(step))
    }

    /// Apply a history pop event (back/forward reported by the host)
    pub fn pop_to(&mut self, path: &str) -> &Resolution {
        if path == self.location {
            return &self.current;
        }
        self.apply(path)
    }

    /// Current concrete location
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Resolution of the current location
    pub fn resolution(&self) -> &Resolution {
        &self.current
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Number of renders committed so far
    pub fn renders(&self) -> u64 {
        self.renders
    }

    fn step(&mut self, step: HistoryStep) -> Option<&Resolution> {
        match step {
            HistoryStep::Moved(path) => Some(self.pop_to(&path)),
            HistoryStep::Pending | HistoryStep::AtEdge => None,
        }
    }

    fn apply(&mut self, path: &str) -> &Resolution {
        self.location = path.to_string();
        self.current = Resolution::resolve(&self.table, path);
        self.commit();
        &self.current
    }

    fn commit(&mut self) {
        match &self.current {
            Resolution::Matched(m) => {
                tracing::debug!(path = %self.location, view = %m.view, "route resolved");
            }
            Resolution::NotFound { path } => {
                tracing::warn!(path = %path, "no route matches path");
            }
        }
        (self.render)(&self.current);
        self.renders += 1;
    }
}

/// In-app targets are absolute paths on the same origin
fn validate_target(path: &str) -> NavigationResult<()> {
    if !path.starts_with('/') || path.starts_with("//") {
        tracing::warn!(path, "rejected navigation target");
        return Err(NavigationError::InvalidPath(path.to_string()));
    }
    Ok(())
}
